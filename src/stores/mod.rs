// Shared state
// The used-identifier registry lives here, provided through context

pub mod used_ids;
