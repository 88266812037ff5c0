//! Integration tests for the StationService → classification → sink pipeline.
//!
//! These run on the host (x86_64) and verify the full per-tick chain —
//! raw snapshot in, classified sample out, pump commands applied — with
//! mock port implementations.

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

use floodstation::app::commands::StationCommand;
use floodstation::app::events::StationEvent;
use floodstation::app::ports::ActuatorPort;
use floodstation::app::service::StationService;
use floodstation::classify::{RainBand, RiverBand, WindBand};
use floodstation::config::StationConfig;
use floodstation::drivers::relay::PumpChannel;

fn make_station() -> (StationService, MockHardware, RecordingSink) {
    let mut service = StationService::new(StationConfig::default());
    let hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    service.start(&mut sink);
    (service, hw, sink)
}

// ── Lifecycle ─────────────────────────────────────────────────

#[test]
fn start_announces_to_the_sink() {
    let (_, _, sink) = make_station();
    assert_eq!(sink.events, vec![StationEvent::Started]);
}

// ── Per-tick pipeline ─────────────────────────────────────────

#[test]
fn flood_scenario_classifies_every_signal_danger() {
    let (mut service, mut hw, mut sink) = make_station();
    hw.snapshot.rain_raw = 1200;
    hw.snapshot.wind_raw = 200;
    hw.snapshot.river_distance_cm = 3.0; // 140 - 30 = 110 mm

    service.sample(&mut hw, &mut sink);

    let sample = sink.last_sample().expect("one sample published");
    assert_eq!(sample.river_level_mm, 110);
    assert_eq!(sample.rain_band, RainBand::High);
    assert_eq!(sample.wind_band, WindBand::High);
    assert_eq!(sample.river_band, RiverBand::FloodAlert);
    assert_eq!(service.tick_count(), 1);
}

#[test]
fn quiet_scenario_classifies_all_clear() {
    let (mut service, mut hw, mut sink) = make_station();

    service.sample(&mut hw, &mut sink);

    let sample = sink.last_sample().unwrap();
    assert_eq!(sample.rain_band, RainBand::NoRain);
    assert_eq!(sample.wind_band, WindBand::Low);
    assert_eq!(sample.river_band, RiverBand::Normal);
    assert_eq!(sample.rain_level_mm, 0); // 100 - 100
    assert_eq!(sample.river_level_mm, 0); // 140 - 140
    assert_eq!(sample.temperature_c, Some(22.5));
    assert_eq!(sample.humidity_pct, Some(60.0));
}

#[test]
fn env_fault_leaves_optional_fields_absent() {
    let (mut service, mut hw, mut sink) = make_station();
    hw.snapshot.env = None;
    hw.snapshot.rain_raw = 2500;

    service.sample(&mut hw, &mut sink);

    let sample = sink.last_sample().unwrap();
    assert_eq!(sample.temperature_c, None);
    assert_eq!(sample.humidity_pct, None);
    // Everything else is still computed and emitted.
    assert_eq!(sample.rain_raw, 2500);
    assert_eq!(sample.rain_band, RainBand::Medium);
    assert_eq!(sample.river_band, RiverBand::Normal);
}

#[test]
fn timed_out_gauge_classifies_as_over_height() {
    // A gauge that timed out reads 0.0 cm, which converts to the full
    // calibrated height — the station reports a flood, not a blank.
    let (mut service, mut hw, mut sink) = make_station();
    hw.snapshot.river_distance_cm = 0.0;

    service.sample(&mut hw, &mut sink);

    let sample = sink.last_sample().unwrap();
    assert_eq!(sample.river_level_mm, 140);
    assert_eq!(sample.river_band, RiverBand::FloodAlert);
}

#[test]
fn negative_levels_reach_the_sink_unclamped() {
    let (mut service, mut hw, mut sink) = make_station();
    hw.snapshot.river_distance_cm = 20.0; // past the channel floor

    service.sample(&mut hw, &mut sink);

    let sample = sink.last_sample().unwrap();
    assert_eq!(sample.river_level_mm, -60);
    assert_eq!(sample.river_band, RiverBand::Normal);
}

#[test]
fn every_tick_publishes_exactly_one_sample() {
    let (mut service, mut hw, mut sink) = make_station();
    for _ in 0..5 {
        service.sample(&mut hw, &mut sink);
    }
    assert_eq!(sink.samples().len(), 5);
    assert_eq!(service.tick_count(), 5);
}

// ── Command handling ──────────────────────────────────────────

#[test]
fn pump_command_applies_immediately_and_reflects_back() {
    let (mut service, mut hw, mut sink) = make_station();

    service.handle_command(
        StationCommand::SetPump {
            pump: PumpChannel::River,
            on: true,
        },
        &mut hw,
        &mut sink,
    );

    assert_eq!(
        hw.last_call(),
        Some(&ActuatorCall::SetPump {
            pump: PumpChannel::River,
            on: true
        })
    );
    assert!(hw.pump_is_on(PumpChannel::River));
    assert!(!hw.pump_is_on(PumpChannel::Rain));
    assert!(sink.events.contains(&StationEvent::PumpChanged {
        pump: PumpChannel::River,
        on: true,
    }));
}

#[test]
fn pump_commands_never_alter_classification() {
    let (mut service, mut hw, mut sink) = make_station();
    hw.snapshot.rain_raw = 1200;
    hw.snapshot.wind_raw = 120;
    hw.snapshot.river_distance_cm = 8.0;

    service.sample(&mut hw, &mut sink);
    let before = sink.last_sample().unwrap();

    // Toggle both pumps between ticks.
    for (pump, on) in [
        (PumpChannel::Rain, true),
        (PumpChannel::River, true),
        (PumpChannel::Rain, false),
    ] {
        service.handle_command(StationCommand::SetPump { pump, on }, &mut hw, &mut sink);
    }

    service.sample(&mut hw, &mut sink);
    let after = sink.last_sample().unwrap();

    assert_eq!(before.rain_band, after.rain_band);
    assert_eq!(before.wind_band, after.wind_band);
    assert_eq!(before.river_band, after.river_band);
    assert_eq!(before.river_level_mm, after.river_level_mm);
}

// ── Configuration read-back ───────────────────────────────────

#[test]
fn config_read_back_matches_construction() {
    let (service, _, _) = make_station();
    let cfg = service.current_config();
    assert_eq!(cfg.sample_period_ms, StationConfig::default().sample_period_ms);
    assert_eq!(cfg.river_channel_height_mm, 140);
    assert_eq!(cfg.rain_gauge_height_mm, 100);
}

// ── Dashboard sink ────────────────────────────────────────────

#[test]
fn dashboard_encodes_samples_as_json() {
    use floodstation::adapters::dashboard::DashboardSink;

    let (mut service, mut hw, _) = make_station();
    let mut dash = DashboardSink::new();
    hw.snapshot.river_distance_cm = 3.0;
    hw.snapshot.rain_raw = 1200;

    service.sample(&mut hw, &mut dash);

    let payload = dash.last_payload().expect("sample encoded");
    assert!(payload.contains("\"river_level_mm\":110"));
    assert!(payload.contains("\"rain_band\":\"High\""));
    assert!(payload.contains("\"river_band\":\"FloodAlert\""));
}

#[test]
fn dashboard_mailbox_hands_over_pending_toggles() {
    use floodstation::adapters::dashboard::DashboardSink;

    let mut dash = DashboardSink::new();
    assert!(dash.push_command(StationCommand::SetPump {
        pump: PumpChannel::Rain,
        on: true,
    }));
    assert!(dash.push_command(StationCommand::SetPump {
        pump: PumpChannel::River,
        on: false,
    }));

    let drained = dash.take_pending_commands();
    assert_eq!(drained.len(), 2);
    assert_eq!(
        drained[0],
        StationCommand::SetPump {
            pump: PumpChannel::Rain,
            on: true
        }
    );

    // Mailbox is empty after the handover.
    assert!(dash.take_pending_commands().is_empty());
}

#[test]
fn dashboard_mailbox_drops_toggles_when_full() {
    use floodstation::adapters::dashboard::DashboardSink;

    let mut dash = DashboardSink::new();
    let cmd = StationCommand::SetPump {
        pump: PumpChannel::Rain,
        on: true,
    };
    for _ in 0..8 {
        assert!(dash.push_command(cmd));
    }
    assert!(!dash.push_command(cmd), "ninth toggle must be rejected");
    assert_eq!(dash.take_pending_commands().len(), 8);
}
