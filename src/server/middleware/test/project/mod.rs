mod require;
