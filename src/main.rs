//! FloodStation Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single cooperative sample loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter     LogEventSink    DashboardSink             │
//! │  (Sensor+Actuator)   (SampleSink)    (SampleSink + commands)   │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            StationService (pure logic)                 │    │
//! │  │  acquire · convert · classify · emit                   │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  SampleLoop pacer (Idle ⇄ Sampling) · SPSC event queue         │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod classify;
pub mod config;
pub mod level;
pub mod sampler;
mod error;
mod events;
mod pins;

pub mod app;
mod adapters;
mod drivers;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::dashboard::DashboardSink;
use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::MonotonicClock;
use app::commands::StationCommand;
use app::events::StationEvent;
use app::ports::{ActuatorPort, SampleSink};
use app::service::StationService;
use config::StationConfig;
use drivers::relay::{PumpChannel, RelayDriver};
use events::{push_event, Event};
use sampler::SampleLoop;
use sensors::dht::EnvSensor;
use sensors::rain::RainSensor;
use sensors::ultrasonic::{Gauge, UltrasonicSensor};
use sensors::wind::WindSensor;
use sensors::SensorHub;

// ── Sink fan-out ──────────────────────────────────────────────
//
// The service takes one sink; the station has two consumers (serial
// log and display transport).  This main-local adapter forwards every
// event to both — the hexagonal fan-out lives outside the core.

struct StationSinks {
    log: LogEventSink,
    dashboard: DashboardSink,
}

impl SampleSink for StationSinks {
    fn publish(&mut self, event: &StationEvent) {
        self.log.publish(event);
        self.dashboard.publish(event);
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  FloodStation v{}                  ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();

    // ── 3. Configuration & clock ──────────────────────────────
    let config = StationConfig::default();
    let clock = MonotonicClock::new();

    // ── 4. Construct adapters ─────────────────────────────────
    let sensor_hub = SensorHub::new(
        UltrasonicSensor::new(
            Gauge::RainContainer,
            pins::RAIN_TRIG_GPIO,
            pins::RAIN_ECHO_GPIO,
            config.echo_timeout_us,
        ),
        UltrasonicSensor::new(
            Gauge::RiverChannel,
            pins::RIVER_TRIG_GPIO,
            pins::RIVER_ECHO_GPIO,
            config.echo_timeout_us,
        ),
        RainSensor::new(pins::RAIN_ADC_GPIO),
        WindSensor::new(pins::WIND_ADC_GPIO),
        EnvSensor::new(pins::DHT_GPIO),
    );

    let mut hw = HardwareAdapter::new(
        sensor_hub,
        RelayDriver::new(PumpChannel::Rain, pins::RAIN_PUMP_GPIO),
        RelayDriver::new(PumpChannel::River, pins::RIVER_PUMP_GPIO),
    );
    hw.all_off(); // known-safe relay state at boot

    let mut sinks = StationSinks {
        log: LogEventSink::new(),
        dashboard: DashboardSink::new(),
    };

    // ── 5. Construct app service & pacer ──────────────────────
    let mut service = StationService::new(config.clone());
    service.start(&mut sinks);
    let mut pacer = SampleLoop::new(config.sample_period_ms);

    info!("System ready. Entering sample loop.");

    // ── 6. Sample loop ────────────────────────────────────────
    loop {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            config.poll_interval_ms,
        )));

        // Fixed-period pacing: Idle → Sampling when the period elapses.
        if pacer.poll(clock.uptime_ms()) && !push_event(Event::SampleTick) {
            log::warn!("event queue full, sample tick skipped");
            pacer.complete();
        }

        // Forward display-side pump toggles into the queue.  The
        // transport may also push from its own task; both paths meet in
        // the same SPSC queue.
        for cmd in sinks.dashboard.take_pending_commands() {
            let StationCommand::SetPump { pump, on } = cmd;
            let event = match (pump, on) {
                (PumpChannel::Rain, true) => Event::RainPumpOn,
                (PumpChannel::Rain, false) => Event::RainPumpOff,
                (PumpChannel::River, true) => Event::RiverPumpOn,
                (PumpChannel::River, false) => Event::RiverPumpOff,
            };
            if !push_event(event) {
                log::warn!("event queue full, pump toggle dropped");
            }
        }

        // Process all pending events.
        events::drain_events(|event| match event {
            Event::SampleTick => {
                service.sample(&mut hw, &mut sinks);
                pacer.complete();
            }
            Event::RainPumpOn => service.handle_command(
                StationCommand::SetPump {
                    pump: PumpChannel::Rain,
                    on: true,
                },
                &mut hw,
                &mut sinks,
            ),
            Event::RainPumpOff => service.handle_command(
                StationCommand::SetPump {
                    pump: PumpChannel::Rain,
                    on: false,
                },
                &mut hw,
                &mut sinks,
            ),
            Event::RiverPumpOn => service.handle_command(
                StationCommand::SetPump {
                    pump: PumpChannel::River,
                    on: true,
                },
                &mut hw,
                &mut sinks,
            ),
            Event::RiverPumpOff => service.handle_command(
                StationCommand::SetPump {
                    pump: PumpChannel::River,
                    on: false,
                },
                &mut hw,
                &mut sinks,
            ),
        });

        // Feed watchdog on every iteration.
        watchdog.feed();
    }
}
