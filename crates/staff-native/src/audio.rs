// ---------------- Native tone player (cpal) ----------------

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use staff_core::{AudioPlayer, TONE_AMPLITUDE, TONE_ATTACK_SEC, TONE_FADE_OUT_SEC};
use std::f32::consts::TAU;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
struct Tone {
    phase: f32,     // radians
    phase_inc: f32, // radians per sample
    total_samples: u32,
    samples_emitted: u32,
    attack_samples: u32,
    release_samples: u32,
}

impl Tone {
    fn new(frequency_hz: f64, duration_sec: f64, sample_rate: f32) -> Self {
        let sr = sample_rate as f64;
        let release = (TONE_FADE_OUT_SEC * sr) as u32;
        let total = ((duration_sec.max(0.0) + TONE_FADE_OUT_SEC) * sr) as u32;
        Self {
            phase: 0.0,
            phase_inc: TAU * frequency_hz as f32 / sample_rate,
            total_samples: total.max(1),
            samples_emitted: 0,
            attack_samples: ((TONE_ATTACK_SEC * sr) as u32).min(total),
            release_samples: release.min(total),
        }
    }

    fn envelope(&self) -> f32 {
        let n = self.samples_emitted;
        let release_start = self.total_samples.saturating_sub(self.release_samples);
        if n < self.attack_samples {
            n as f32 / self.attack_samples.max(1) as f32
        } else if n > release_start {
            1.0 - (n - release_start) as f32 / self.release_samples.max(1) as f32
        } else {
            1.0
        }
    }
}

#[derive(Default)]
struct AudioState {
    sample_rate: f32,
    tones: Vec<Tone>,
}

fn mix_sample(tones: &mut Vec<Tone>) -> f32 {
    let mut acc = 0.0f32;
    let mut i = 0usize;
    while i < tones.len() {
        let tone = &mut tones[i];
        acc += tone.phase.sin() * TONE_AMPLITUDE * tone.envelope();
        tone.phase += tone.phase_inc;
        if tone.phase > TAU {
            tone.phase -= TAU;
        }
        tone.samples_emitted += 1;
        if tone.samples_emitted >= tone.total_samples {
            tones.swap_remove(i);
            continue;
        }
        i += 1;
    }
    acc.tanh()
}

/// Polyphonic sine player. Without an output device it stays silent and
/// drops every request.
pub struct TonePlayer {
    state: Arc<Mutex<AudioState>>,
    _stream: Option<cpal::Stream>,
}

impl TonePlayer {
    pub fn start() -> Self {
        let state = Arc::new(Mutex::new(AudioState::default()));
        let stream = open_stream(Arc::clone(&state));
        if stream.is_none() {
            log::warn!("[audio] no output stream; running silent");
        }
        Self {
            state,
            _stream: stream,
        }
    }
}

impl AudioPlayer for TonePlayer {
    fn play(&self, frequency_hz: f64, duration_sec: f64) {
        let Ok(mut guard) = self.state.lock() else {
            log::error!("[audio] state lock poisoned; dropping tone");
            return;
        };
        if guard.sample_rate <= 0.0 {
            return;
        }
        let tone = Tone::new(frequency_hz, duration_sec, guard.sample_rate);
        guard.tones.push(tone);
    }
}

fn open_stream(state: Arc<Mutex<AudioState>>) -> Option<cpal::Stream> {
    let host = cpal::default_host();
    let device = host.default_output_device()?;
    let config = match device.default_output_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("[audio] no default output config: {e}");
            return None;
        }
    };
    let channels = config.channels() as usize;
    if let Ok(mut guard) = state.lock() {
        guard.sample_rate = config.sample_rate().0 as f32;
    }
    log::info!(
        "[audio] device={} rate={} channels={}",
        device.name().unwrap_or_else(|_| "unknown".into()),
        config.sample_rate().0,
        channels
    );

    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config.into(), channels, state),
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config.into(), channels, state),
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config.into(), channels, state),
        other => {
            log::error!("[audio] unsupported sample format {other:?}");
            return None;
        }
    };
    let stream = match stream {
        Ok(s) => s,
        Err(e) => {
            log::error!("[audio] build stream: {e}");
            return None;
        }
    };
    if let Err(e) = stream.play() {
        log::error!("[audio] start stream: {e}");
        return None;
    }
    Some(stream)
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    state: Arc<Mutex<AudioState>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let Ok(mut guard) = state.lock() else {
                data.fill(T::EQUILIBRIUM);
                return;
            };
            for frame in data.chunks_mut(channels.max(1)) {
                let value = T::from_sample(mix_sample(&mut guard.tones));
                frame.fill(value);
            }
        },
        |err| log::error!("[audio] stream error: {err}"),
        None,
    )
}
