mod binary;
mod unary;
