mod addon;
mod contribution;
mod path;
mod submission;
mod texture;
mod texture_use;
mod user;
