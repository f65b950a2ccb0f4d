use rand::Rng;

use crate::{
    controller::announce_config,
    device::SerialLog,
    draw::{DrawSession, Pick},
    error::LottoError,
    game::GameConfig,
    history::DrawHistory,
};

/// Picks from `draws` draw actions on a fresh session, drawn as they are
/// pulled.
pub fn draw_picks<R: Rng + ?Sized>(
    config: GameConfig,
    draws: u32,
    rng: &mut R,
) -> impl Iterator<Item = Pick> + '_ {
    let mut session = DrawSession::new(config);
    (0..draws).map_while(move |_| session.draw(&mut *rng))
}

/// Run `draws` draw actions for a fixed game without the panel, writing the
/// same serial lines the device would. Each pick is written out before the
/// next one is drawn. Returns how many picks were made.
pub fn run_batch<R: Rng + ?Sized>(
    config: GameConfig,
    draws: u32,
    rng: &mut R,
    serial: &mut dyn SerialLog,
    history: Option<&DrawHistory>,
) -> Result<u32, LottoError> {
    announce_config(serial, &config);

    let mut made = 0;
    for pick in draw_picks(config, draws, rng) {
        serial.line(&pick.to_string());
        if let Some(history) = history {
            history.record(&config, &pick)?;
        }
        made += 1;
    }
    Ok(made)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{game::GameType, serial::MemorySerial};
    use itertools::Itertools;
    use rand::{rngs::StdRng, SeedableRng};

    #[derive(Default)]
    struct CountingSerial {
        lines: u64,
        last_len: usize,
    }

    impl SerialLog for CountingSerial {
        fn line(&mut self, text: &str) {
            self.lines += 1;
            self.last_len = text.len();
        }
    }

    #[test]
    fn test_batch_output_lines() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut serial = MemorySerial::default();
        let game = GameConfig::preset(GameType::OzLotto).unwrap();
        assert_eq!(run_batch(game, 7, &mut rng, &mut serial, None).unwrap(), 7);

        let lines: Vec<&str> = serial.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "max Number: 45");
        assert_eq!(lines[1], "game Size: 7");
        assert!(lines[2].starts_with('.'));
        assert!(lines[8].ends_with('.'));
        let mut values = lines[2..]
            .iter()
            .map(|l| l.trim_matches('.').parse::<u8>().unwrap());
        assert!(values.all_unique());
    }

    #[test]
    fn test_draw_picks_spans_rounds() {
        let mut rng = StdRng::seed_from_u64(4);
        let game = GameConfig::custom(5, 5).unwrap();
        let picks: Vec<Pick> = draw_picks(game, 12, &mut rng).collect();

        assert_eq!(picks.len(), 12);
        let rounds: Vec<u32> = picks.iter().map(|p| p.round).dedup().collect();
        assert_eq!(rounds, vec![1, 2, 3]);
        for (_, round) in &picks.iter().chunk_by(|p| p.round) {
            assert!(round.map(|p| p.value).all_unique());
        }
    }

    #[test]
    fn test_draw_picks_is_lazy() {
        let mut rng = StdRng::seed_from_u64(8);
        let game = GameConfig::preset(GameType::Lotto).unwrap();
        let first: Vec<Pick> = draw_picks(game, u32::MAX, &mut rng).take(3).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[2].position, 3);
    }

    #[test]
    fn test_large_batch_streams_every_pick() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut serial = CountingSerial::default();
        let game = GameConfig::preset(GameType::Lotto).unwrap();
        let made = run_batch(game, 1_000_000, &mut rng, &mut serial, None).unwrap();

        assert_eq!(made, 1_000_000);
        assert_eq!(serial.lines, 1_000_002);
        // 1_000_000 is a multiple of 6, so the stream ends on a closing pick
        assert!(serial.last_len >= 2);
    }

    #[test]
    fn test_zero_draws_only_announces() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut serial = MemorySerial::default();
        let game = GameConfig::preset(GameType::Lotto).unwrap();
        assert_eq!(run_batch(game, 0, &mut rng, &mut serial, None).unwrap(), 0);
        assert_eq!(serial.len(), 2);
    }
}
