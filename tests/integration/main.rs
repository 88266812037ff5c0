//! Integration test harness — host-only, no real hardware.

mod mock_hw;
mod station_tests;
