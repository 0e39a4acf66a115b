mod json_array_append;
