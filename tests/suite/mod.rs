mod bounds;
mod config;
mod primality;
mod search;
