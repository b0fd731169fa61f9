mod add_followers;
