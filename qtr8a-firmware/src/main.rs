#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_stm32::Config;
use embassy_stm32::adc::Adc;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::{Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use qtr8a::{Calibrated, Qtr8a, SurfaceState, Thresholds};
use qtr8a_firmware::sensors::line_inputs;

defmt::timestamp!("{=u64}", { embassy_time::Instant::now().as_millis() });

/// How long to sweep the array over line and background after boot.
const CALIBRATION_TIME: Duration = Duration::from_secs(10);

/// Sampling period of the control loop.
const LOOP_PERIOD_MS: u64 = 10;

/// Log the line position every this many loop iterations (~500 ms).
const REPORT_EVERY: u32 = 50;

/// Per-sensor threshold for the line mask.
const MASK_THRESHOLD: f32 = 0.5;

#[embassy_executor::task]
async fn blink_task(mut led: Output<'static>) {
    loop {
        led.toggle();
        Timer::after_millis(500).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Config::default());

    info!("=== QTR-8A Line Sensor ===");

    // LED blink task
    let led = Output::new(p.PA5, Level::Low, Speed::Low);
    spawner.spawn(blink_task(led)).unwrap();

    let adc = RefCell::new(Adc::new(p.ADC1));
    let mut channels = line_inputs(
        &adc, p.PA0, p.PA1, p.PA4, p.PB0, p.PC1, p.PC0, p.PC3, p.PC2,
    )
    .map(Calibrated::new);
    info!("Sensors initialized");

    info!(
        "Calibrating for {} s, sweep the array over the line...",
        CALIBRATION_TIME.as_secs()
    );
    {
        let mut sensor = Qtr8a::with_defaults(&mut channels);
        let start = Instant::now();
        while start.elapsed() < CALIBRATION_TIME {
            sensor.update();
            Timer::after_millis(LOOP_PERIOD_MS).await;
        }
    }

    for (i, channel) in channels.iter_mut().enumerate() {
        match channel.finish() {
            Ok((min, max)) => info!("Sensor {}: range [{}, {}]", i, min, max),
            Err(e) => warn!("Sensor {}: {}, reading raw", i, e),
        }
    }
    info!("Calibration Complete! Running...");

    let mut sensor = Qtr8a::new(&mut channels, Thresholds::default());
    let mut last_state = SurfaceState::OnUnknown;
    let mut ticks: u32 = 0;

    loop {
        sensor.update();

        let state = sensor.get_state();
        if state != last_state {
            info!("Surface: {}", state);
            last_state = state;
        }

        ticks = ticks.wrapping_add(1);
        if state == SurfaceState::OnLine && ticks % REPORT_EVERY == 0 {
            info!(
                "pos={} m mean={} mask={=u8:08b}",
                sensor.line_pos(),
                sensor.get_mean(),
                sensor.line_mask(MASK_THRESHOLD)
            );
        }

        Timer::after_millis(LOOP_PERIOD_MS).await;
    }
}
