use bit_flip_env::{BitFlipEnv, Env, Space};

fn render_bits(values: &[f32]) -> String {
    values.iter().map(|&v| if v > 0.0 { '1' } else { '0' }).collect()
}

fn main() {
    let mut env = BitFlipEnv::new(8, 42).expect("8 is a valid bit length");
    let action_space = env.action_space();
    let mut rng = rand::thread_rng();

    for episode in 1..=3 {
        let (obs, _info) = env.reset(None);
        println!("episode {episode}");
        println!("  start {}  goal {}", render_bits(&obs.state), render_bits(&obs.goal));

        let mut steps = 0u32;
        loop {
            let action = action_space.sample(&mut rng);
            let step = env.step(action).expect("sampled action is in range");
            steps += 1;
            println!(
                "  flip {action}: state {}  reward {}",
                render_bits(&step.observation.state),
                step.reward
            );
            if step.terminated {
                println!("  solved in {steps} steps");
                break;
            }
            if step.truncated {
                println!("  out of budget after {steps} steps");
                break;
            }
        }
    }
}
