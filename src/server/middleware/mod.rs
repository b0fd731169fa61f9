pub mod auth;
pub mod project;

#[cfg(test)]
mod test;
