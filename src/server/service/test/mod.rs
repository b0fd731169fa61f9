mod comment;
