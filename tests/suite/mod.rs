mod cli;
mod composition;
mod registry;
mod theme;
