mod exprs;
