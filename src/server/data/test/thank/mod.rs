mod thanks;
