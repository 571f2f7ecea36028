mod dialects;
mod features;
