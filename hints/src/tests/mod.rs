mod common;
mod test_gate;
