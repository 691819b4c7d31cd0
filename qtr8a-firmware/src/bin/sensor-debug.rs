#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::Config;
use embassy_stm32::adc::Adc;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use qtr8a::Qtr8a;
use qtr8a_firmware::sensors::line_inputs;

defmt::timestamp!("{=u64}", { embassy_time::Instant::now().as_millis() });

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Config::default());

    info!("=== Sensor Debug Mode ===");

    // LED for visual feedback
    let mut led = Output::new(p.PA5, Level::Low, Speed::Low);

    let adc = RefCell::new(Adc::new(p.ADC1));
    let mut channels = line_inputs(
        &adc, p.PA0, p.PA1, p.PA4, p.PB0, p.PC1, p.PC0, p.PC3, p.PC2,
    );
    let mut sensor = Qtr8a::with_defaults(&mut channels);

    info!("ADC initialized, starting sensor readings...");
    info!("Format: [S1 .. S8] mean state");

    loop {
        sensor.update();

        info!(
            "QTR: {} {} {}",
            sensor.readings(),
            sensor.get_mean(),
            sensor.get_state()
        );

        // Toggle LED to show we're running
        led.toggle();

        // Wait 500ms between readings
        Timer::after_millis(500).await;
    }
}
