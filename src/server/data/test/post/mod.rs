mod comment_stats;
