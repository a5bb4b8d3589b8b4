use super::event::Event;
use super::event::Listener;
use super::phase::Phase;
use super::verdict::Verdict;
use crate::POINT;
use crate::Score;
use crate::gameplay::Round;
use crate::gameplay::Side;
use crate::gameplay::resolve;
use crate::players::Seat;

/// Match controller for a fixed number of rounds between two seats.
///
/// Each round:
/// - ask side one, then side two, for a move
/// - resolve and award the winner one point
/// - reveal both moves to each seat (own move first)
///
/// A failure while asking for a move aborts the match on the spot. The room
/// stays `InProgress` and never produces a verdict.
#[derive(Debug)]
pub struct Room {
    one: Seat,
    two: Seat,
    rounds: usize,
    phase: Phase,
}

impl Room {
    pub fn new(one: Seat, two: Seat, rounds: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(rounds > 0, "a match needs at least one round");
        Ok(Self {
            one,
            two,
            rounds,
            phase: Phase::NotStarted,
        })
    }

    /// Run every remaining round, narrating to `listener`.
    pub fn play<L>(&mut self, listener: &mut L) -> anyhow::Result<Verdict>
    where
        L: Listener + ?Sized,
    {
        anyhow::ensure!(self.phase != Phase::Finished, "cannot play a match that is {}", self.phase);
        if self.phase == Phase::NotStarted {
            listener.notify(&Event::Start(self.rounds()));
        }
        while let Some(done) = self.phase.completed() {
            listener.notify(&Event::Next(done + 1));
            let round = self
                .step()
                .inspect_err(|e| log::warn!("match abandoned in round {}: {}", done + 1, e))?;
            listener.notify(&Event::Round(round));
        }
        let verdict = self
            .verdict()
            .ok_or_else(|| anyhow::anyhow!("room finished without a verdict"))?;
        listener.notify(&Event::Over(verdict, self.scores()));
        Ok(verdict)
    }

    /// Play exactly one round.
    pub fn step(&mut self) -> anyhow::Result<Round> {
        let done = self
            .phase
            .completed()
            .ok_or_else(|| anyhow::anyhow!("match already finished after {} rounds", self.rounds))?;
        self.phase = Phase::InProgress(done);
        let one = self.one.decide()?;
        let two = self.two.decide()?;
        let winner = resolve(one, two);
        self.award(winner);
        self.one.notify(one, two);
        self.two.notify(two, one);
        let index = done + 1;
        self.phase = match index == self.rounds {
            true => Phase::Finished,
            false => Phase::InProgress(index),
        };
        log::debug!(
            "round {}: {} vs {} -> {}",
            index,
            one,
            two,
            winner.map_or(String::from("tie"), |s| s.to_string())
        );
        Ok(Round::from((index, (one, two), winner, self.scores())))
    }

    /// Final result. Only available once every round has been played.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Finished => Some(Verdict::from(self.scores())),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn scores(&self) -> (Score, Score) {
        (self.one.score(), self.two.score())
    }
    pub fn seat(&self, side: Side) -> &Seat {
        match side {
            Side::One => &self.one,
            Side::Two => &self.two,
        }
    }
}

impl Room {
    fn award(&mut self, winner: Option<Side>) {
        if let Some(side) = winner {
            match side {
                Side::One => self.one.add_score(POINT),
                Side::Two => self.two.add_score(POINT),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Move;
    use crate::players::Abort;
    use crate::players::Cycle;
    use crate::players::Fixed;
    use crate::players::Human;
    use crate::players::Mirror;
    use crate::players::Opponent;
    use crate::players::Script;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::io::Cursor;

    fn room(one: Move, two: Move, rounds: usize) -> Room {
        Room::new(
            Seat::from(Fixed::from(one)),
            Seat::from(Fixed::from(two)),
            rounds,
        )
        .expect("positive rounds")
    }

    #[test]
    fn zero_rounds_rejected() {
        let one = Seat::from(Fixed::default());
        let two = Seat::from(Fixed::default());
        assert!(Room::new(one, two, 0).is_err());
    }

    #[test]
    fn rock_sweeps_scissors() {
        let mut room = room(Move::Rock, Move::Scissors, 5);
        let verdict = room.play(&mut ()).expect("bots never fail");
        assert!(room.scores() == (5, 0));
        assert!(verdict == Verdict::Winner(Side::One));
    }

    #[test]
    fn identical_moves_tie() {
        let mut room = room(Move::Paper, Move::Paper, 3);
        let verdict = room.play(&mut ()).expect("bots never fail");
        assert!(room.scores() == (0, 0));
        assert!(verdict == Verdict::Tie);
    }

    #[test]
    fn single_round_outcomes() {
        let mut win = room(Move::Rock, Move::Scissors, 1);
        let round = win.step().expect("bots never fail");
        assert!(round.winner() == Some(Side::One));
        assert!(round.scores() == (1, 0));
        let mut tie = room(Move::Paper, Move::Paper, 1);
        let round = tie.step().expect("bots never fail");
        assert!(round.winner().is_none());
        assert!(round.scores() == (0, 0));
    }

    #[test]
    fn phases_advance_then_lock() {
        let mut room = room(Move::Rock, Move::Paper, 2);
        assert!(room.phase() == Phase::NotStarted);
        assert!(room.verdict().is_none());
        room.step().expect("round 1");
        assert!(room.phase() == Phase::InProgress(1));
        assert!(room.verdict().is_none());
        room.step().expect("round 2");
        assert!(room.phase() == Phase::Finished);
        assert!(room.verdict() == Some(Verdict::Winner(Side::Two)));
        assert!(room.step().is_err());
        let err = room.play(&mut ()).expect_err("no rounds left");
        assert!(err.to_string() == "cannot play a match that is finished");
        assert!(room.rounds() == 2);
        assert!(room.scores() == (0, 2));
    }

    #[test]
    fn events_narrate_match() {
        let mut room = room(Move::Scissors, Move::Paper, 2);
        let mut events = Vec::new();
        room.play(&mut events).expect("bots never fail");
        assert!(events.len() == 6);
        assert!(events[0] == Event::Start(2));
        assert!(events[1] == Event::Next(1));
        assert!(events[3] == Event::Next(2));
        assert!(events[5] == Event::Over(Verdict::Winner(Side::One), (2, 0)));
    }

    #[test]
    fn seats_see_each_others_moves() {
        let mut room = room(Move::Rock, Move::Paper, 1);
        room.step().expect("bots never fail");
        assert!(room.seat(Side::One).last() == Some(Move::Rock));
        assert!(room.seat(Side::One).seen() == Some(Move::Paper));
        assert!(room.seat(Side::Two).last() == Some(Move::Paper));
        assert!(room.seat(Side::Two).seen() == Some(Move::Rock));
    }

    #[test]
    fn mirror_copies_fixed_opponent() {
        let one = Seat::from(Fixed::from(Move::Scissors));
        let two = Seat::from(Mirror::from(SmallRng::seed_from_u64(5)));
        let mut room = Room::new(one, two, 4).expect("positive rounds");
        let mut events = Vec::new();
        room.play(&mut events).expect("bots never fail");
        let later = events
            .iter()
            .filter_map(|e| match e {
                Event::Round(r) if r.index() > 1 => Some(r.played(Side::Two)),
                _ => None,
            })
            .collect::<Vec<Move>>();
        assert!(later == vec![Move::Scissors; 3]);
    }

    #[test]
    fn cycle_steps_each_round() {
        let one = Seat::from(Cycle::from(SmallRng::seed_from_u64(8)));
        let two = Seat::from(Fixed::default());
        let mut room = Room::new(one, two, 6).expect("positive rounds");
        let mut events = Vec::new();
        room.play(&mut events).expect("bots never fail");
        let played = events
            .iter()
            .filter_map(|e| match e {
                Event::Round(r) => Some(r.played(Side::One)),
                _ => None,
            })
            .collect::<Vec<Move>>();
        for pair in played.windows(2) {
            assert!(pair[1] == pair[0].successor());
        }
    }

    #[test]
    fn closed_input_aborts_without_verdict() {
        let human = Human::from(Script::from((Cursor::new("rock\n"), std::io::sink())));
        let one = Seat::from(human);
        let two = Seat::from(Fixed::from(Move::Scissors));
        let mut room = Room::new(one, two, 3).expect("positive rounds");
        let mut events = Vec::new();
        let err = room.play(&mut events).expect_err("input runs out in round 2");
        assert!(err.is::<Abort>());
        assert!(room.phase() == Phase::InProgress(1));
        assert!(room.verdict().is_none());
        assert!(room.scores() == (1, 0));
        assert!(!events.iter().any(|e| matches!(e, Event::Over(..))));
    }

    proptest! {
        #[test]
        fn scores_count_round_wins(seed in any::<u64>(), rounds in 1usize..32, a in 0usize..3, b in 0usize..3) {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let one = Seat::new(Opponent::all()[a].spawn(SmallRng::from_rng(rng)));
            let two = Seat::new(Opponent::all()[b].spawn(SmallRng::from_rng(rng)));
            let mut room = Room::new(one, two, rounds).expect("positive rounds");
            let mut events = Vec::new();
            let verdict = room.play(&mut events).expect("bots never fail");
            let wins = |side| {
                events
                    .iter()
                    .filter(|e| matches!(e, Event::Round(r) if r.winner() == Some(side)))
                    .count() as Score
            };
            prop_assert_eq!(room.scores(), (wins(Side::One), wins(Side::Two)));
            prop_assert!(room.scores().0 + room.scores().1 <= rounds as Score);
            prop_assert_eq!(verdict, Verdict::from(room.scores()));
        }
    }
}
