use crate::system::inputs::Inputs;

pub fn sample_until_encoder_is_clicked(inputs: &mut Inputs) {
    loop {
        inputs.sample();
        if inputs.encoder.clicked {
            break;
        }
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}
