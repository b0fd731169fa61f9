mod delete_by_comment;
