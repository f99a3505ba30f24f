/// Convenience type to make error mapping cleaner
pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
