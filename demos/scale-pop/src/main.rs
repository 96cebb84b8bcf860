// scale-pop
//
// Minimal host around pulse-feedbacks: one stage target, one scale feedback,
// a fixed-timestep loop. Walks the feedback through a forward play, a reverse
// play, a mid-flight stop and a restore, logging the live scale so the state
// machine is visible.

use glam::Vec3;
use pulse_feedbacks::{
    Curve, CurveFamily, EndValue, Feedback, FeedbackRunner, FixedTimestep, PlayDirection,
    ScaleConfig, ScaleFeedback, StartValue, Stage, Target, TargetId, Timing,
};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut stage = Stage::new();
    let crate_id = TargetId(1);
    stage.spawn(Target::new(crate_id).with_tag("crate"));

    let config = ScaleConfig {
        timing: Timing::Fixed(0.6),
        start_value: StartValue::Initial,
        end_value: EndValue::Custom,
        end: Vec3::splat(2.0),
        curve_x: Curve::ease_out(CurveFamily::Back),
        curve_y: Curve::ease_out(CurveFamily::Back),
        curve_z: Curve::ease_out(CurveFamily::Back),
        ..ScaleConfig::default()
    };
    let mut pop = ScaleFeedback::new(crate_id, config);
    pop.initialize(&stage);

    let runner = FeedbackRunner::new();
    log::info!(
        "scale pop lasts {:.2}s as the host observes it",
        runner.effective_duration(&pop)
    );

    log::info!("-- forward play --");
    pop.play(&mut stage, Vec3::ZERO, 1.0);
    run_until_done(&runner, &mut stage, &mut pop, crate_id);

    log::info!("-- reverse play --");
    pop.direction = PlayDirection::Reverse;
    pop.play(&mut stage, Vec3::ZERO, 1.0);
    run_until_done(&runner, &mut stage, &mut pop, crate_id);

    log::info!("-- stop mid-flight, then restore --");
    pop.direction = PlayDirection::Forward;
    pop.play(&mut stage, Vec3::ZERO, 1.0);
    let mut clock = FixedTimestep::new(FRAME_DT);
    for _ in 0..10 {
        for _ in 0..clock.advance(FRAME_DT) {
            runner.step(&mut stage, &mut pop, clock.step());
        }
    }
    pop.stop(&mut stage, Vec3::ZERO, 1.0);
    log::info!(
        "stopped at {} (stays wherever the last tick put it)",
        stage.get(crate_id).unwrap().scale
    );

    pop.restore_initial_values(&mut stage);
    log::info!("restored to {}", stage.get(crate_id).unwrap().scale);
}

fn run_until_done(runner: &FeedbackRunner, stage: &mut Stage, pop: &mut ScaleFeedback, id: TargetId) {
    let mut clock = FixedTimestep::new(FRAME_DT);
    let mut frame = 0;
    loop {
        let mut alive = true;
        for _ in 0..clock.advance(FRAME_DT) {
            alive = runner.step(stage, pop, clock.step());
        }
        frame += 1;
        if frame % 6 == 0 || !alive {
            log::info!("frame {frame:3}: scale = {}", stage.get(id).unwrap().scale);
        }
        if !alive {
            break;
        }
    }
}
