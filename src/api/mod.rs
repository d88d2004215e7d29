mod exchange_rate;
mod explanation;
mod image;
mod location;
mod news;
