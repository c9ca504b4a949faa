mod blocks;
mod document;
