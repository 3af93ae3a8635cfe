//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, ParamType, Point3, and Error.

mod values;
