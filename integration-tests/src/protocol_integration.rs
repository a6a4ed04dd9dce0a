//! JSON-RPC round trips against a served instance over an in-memory pipe
