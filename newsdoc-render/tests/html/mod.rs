mod escaping;
mod export;
