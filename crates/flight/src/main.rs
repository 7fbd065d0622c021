//! Headless demo: builds a small island world, scripts thruster input, and
//! steps the session while logging flight events.

use anyhow::Result;
use engine_core::{Time, Transform};
use flight::{FlightConfig, FlightSession, MissionPhase, PadLanding};
use glam::Vec3;
use world::{HeightGrid, Pad, Structure, WorldGeometry};

const DT: f32 = 1.0 / 60.0;

fn build_world() -> WorldGeometry {
    // A gentle island: raised in the middle, sloping underwater at the rim.
    let terrain = HeightGrid::from_fn(200.0, 64, 0.0, |x, z| {
        let d = (x * x + z * z).sqrt();
        4.0 - d * 0.06
    });

    let structures = vec![
        Structure::new(20.0, 0.0, 4.0, 4.0, 0.0, 12.0),
        Structure::new(-15.0, 18.0, 3.0, 6.0, 0.0, 8.0),
    ];
    let pads = vec![
        Pad::new(0, 0.0, 0.0, 4.0, 4.0, 0.0, 4.5),
        Pad::new(1, 35.0, -20.0, 4.0, 4.0, 0.0, 3.0),
    ];

    WorldGeometry::new(Box::new(terrain))
        .with_structures(structures)
        .with_pads(pads)
}

fn main() -> Result<()> {
    env_logger::init();

    let config = FlightConfig::load();
    let world = build_world();
    let target = world.pad(1).map(|p| Vec3::new(p.center_x, p.top, p.center_z));

    let mut mission = PadLanding::new(1, Some(120.0));
    if let Some(position) = target {
        mission = mission.with_target_position(position);
    }

    let spawn = Transform::from_position(Vec3::new(0.0, 5.0, 0.0));
    let mut session = FlightSession::new(config, world, Box::new(mission), spawn);

    let mut time = Time::new();
    log::info!("openvtol headless demo: fly from pad 0 toward pad 1");

    for frame in 0u64..7200 {
        time.update();

        // Scripted pilot: climb, cruise toward the target, then settle.
        let thrusters = match frame {
            0..=240 => [true, true, true, true],
            241..=500 => [false, false, true, true],
            501..=900 => [true, true, true, true],
            _ => {
                let airborne = !session.craft.grounded;
                [airborne, airborne, airborne, airborne]
            }
        };
        for (slot, held) in thrusters.into_iter().enumerate() {
            session.input.set_thruster(slot, held);
        }

        session.update(DT);

        for event in session.drain_events() {
            log::info!("frame {}: {:?}", frame, event);
        }

        match session.phase {
            MissionPhase::MissionComplete | MissionPhase::RaceFailed => break,
            MissionPhase::ShipDeath => {
                session.input.pulse_restart();
            }
            _ => {}
        }
    }

    let snapshot = session.snapshot();
    log::info!(
        "demo finished in {:?} at {:.1?} with {:.0}/{:.0} health ({} frames, {:.1} fps avg)",
        session.phase,
        snapshot.position,
        snapshot.health,
        snapshot.max_health,
        time.frame_count(),
        time.frame_count() as f32 / time.elapsed_seconds().max(1e-6),
    );
    Ok(())
}
