mod common;
mod test_context;
