#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::scheduler::{PeriodicTimer, SpawnScheduler, TimerEvent};

    fn drain(scheduler: &mut SpawnScheduler, now_ms: u64) -> Vec<(TimerEvent, u64)> {
        std::iter::from_fn(|| scheduler.next_due(now_ms)).collect()
    }

    #[test]
    fn test_timer_first_fire_is_one_period_after_programming() {
        let timer = PeriodicTimer::new(700, 1_000);
        assert_eq!(timer.period_ms(), 700);
        assert_eq!(timer.next_fire_ms(), 1_700);
    }

    #[test]
    fn test_timer_reprogram_discards_phase() {
        let mut timer = PeriodicTimer::new(700, 0);
        timer.reprogram(660, 5_000);
        assert_eq!(timer.period_ms(), 660);
        assert_eq!(timer.next_fire_ms(), 5_660);
    }

    #[test]
    fn test_nothing_due_before_first_period() {
        let mut scheduler = SpawnScheduler::new(700, 5_000, 0);
        assert_eq!(scheduler.next_due(0), None);
        assert_eq!(scheduler.next_due(699), None);
    }

    #[test]
    fn test_spawn_fires_each_period() {
        let mut scheduler = SpawnScheduler::new(700, 5_000, 0);

        assert_eq!(drain(&mut scheduler, 700), vec![(TimerEvent::Spawn, 700)]);
        assert_eq!(drain(&mut scheduler, 1_399), vec![]);
        assert_eq!(drain(&mut scheduler, 1_400), vec![(TimerEvent::Spawn, 1_400)]);
    }

    #[test]
    fn test_missed_fires_are_delivered_in_order() {
        let mut scheduler = SpawnScheduler::new(700, 5_000, 0);

        let events = drain(&mut scheduler, 2_100);
        assert_eq!(
            events,
            vec![
                (TimerEvent::Spawn, 700),
                (TimerEvent::Spawn, 1_400),
                (TimerEvent::Spawn, 2_100),
            ]
        );
    }

    #[test]
    fn test_spawn_wins_ties_with_difficulty() {
        let mut scheduler = SpawnScheduler::new(1_000, 5_000, 0);

        let events = drain(&mut scheduler, 5_000);
        assert_eq!(events.len(), 6);
        assert_eq!(events[4], (TimerEvent::Spawn, 5_000));
        assert_eq!(events[5], (TimerEvent::DifficultyUp, 5_000));
    }

    #[test]
    fn test_difficulty_period_is_fixed() {
        let mut scheduler = SpawnScheduler::new(700, 5_000, 0);
        scheduler.reprogram_spawn(180, 0);

        let ticks: Vec<u64> = drain(&mut scheduler, 20_000)
            .into_iter()
            .filter(|(event, _)| *event == TimerEvent::DifficultyUp)
            .map(|(_, at)| at)
            .collect();
        assert_eq!(ticks, vec![5_000, 10_000, 15_000, 20_000]);
    }

    #[test]
    fn test_reprogrammed_spawn_applies_to_next_interval() {
        let mut scheduler = SpawnScheduler::new(700, 5_000, 0);
        drain(&mut scheduler, 4_900);

        scheduler.reprogram_spawn(660, 5_000);
        assert_eq!(scheduler.spawn_timer().next_fire_ms(), 5_660);
        assert_eq!(scheduler.difficulty_timer().next_fire_ms(), 5_000);
    }
}
