#[cfg(test)]
mod group;
