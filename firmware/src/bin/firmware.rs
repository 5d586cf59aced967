#![no_main]
#![no_std]

use preamp_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0])]
mod app {
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use stm32h7xx_hal::pac::TIM2;
    use stm32h7xx_hal::timer::Timer;

    use preamp_control::Store;
    use preamp_firmware::system::inputs::{Infrared, Inputs};
    use preamp_firmware::system::outputs::Outputs;
    use preamp_firmware::system::System;
    use preamp_firmware::PROFILE;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {
        remote_code: Option<u32>,
    }

    #[local]
    struct Local {
        infrared: Infrared,
        sampler: Timer<TIM2>,
        inputs: Inputs,
        outputs: Outputs,
        store: Store,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let infrared = system.infrared;
        let sampler = system.sampler;
        let inputs = system.inputs;
        let outputs = system.outputs;

        defmt::info!("Starting with channels={:?}", PROFILE.channels);
        let store = Store::new(PROFILE);

        control::spawn().unwrap();

        (
            Shared { remote_code: None },
            Local {
                infrared,
                sampler,
                inputs,
                outputs,
                store,
            },
            init::Monotonics(mono),
        )
    }

    #[task(binds = TIM2, local = [infrared, sampler], shared = [remote_code], priority = 3)]
    fn sample_infrared(mut cx: sample_infrared::Context) {
        cx.local.sampler.clear_irq();
        if let Some(code) = cx.local.infrared.sample() {
            cx.shared.remote_code.lock(|remote_code| {
                *remote_code = Some(code);
            });
        }
    }

    #[task(local = [inputs, outputs, store], shared = [remote_code], priority = 1)]
    fn control(mut cx: control::Context) {
        control::spawn_after(1.millis()).unwrap();

        let inputs = cx.local.inputs;
        let outputs = cx.local.outputs;
        let store = cx.local.store;

        #[allow(clippy::cast_possible_truncation)]
        let now = monotonics::now().ticks() as u32;
        let remote_code = cx.shared.remote_code.lock(Option::take);

        inputs.sample();
        let desired_output = store.apply_input_snapshot(inputs.snapshot(now, remote_code));
        outputs.set(&desired_output);
    }
}
