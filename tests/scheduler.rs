mod tests {
    use embassy_time::Duration;
    use ws2812_matrix_clock::offload::OffloadQueue;
    use ws2812_matrix_clock::scheduler::{Scheduler, WorkError};

    #[derive(Default)]
    struct Ctx {
        fast: u32,
        slow: u32,
        offloaded: u32,
    }

    fn count_fast(ctx: &mut Ctx) -> Result<(), WorkError> {
        ctx.fast += 1;
        Ok(())
    }

    fn count_slow(ctx: &mut Ctx) -> Result<(), WorkError> {
        ctx.slow += 1;
        Ok(())
    }

    fn count_offloaded(ctx: &mut Ctx) -> Result<(), WorkError> {
        ctx.offloaded += 1;
        Ok(())
    }

    fn always_fail(_ctx: &mut Ctx) -> Result<(), WorkError> {
        Err(WorkError)
    }

    #[test]
    fn test_phase_law() {
        // BASE_TICK = 20ms, rate = 1: a 100ms worker fires exactly on
        // ticks where t % 5 == 0.
        let mut scheduler: Scheduler<Ctx, 4, 4> = Scheduler::new();
        scheduler.add_work(count_fast, Duration::from_millis(100));

        let mut ctx = Ctx::default();
        for t in 1..=100_000u64 {
            let before = ctx.fast;
            scheduler.tick(&mut ctx);
            let fired = ctx.fast > before;
            assert_eq!(fired, t % 5 == 0, "tick {t}");
        }
        assert_eq!(ctx.fast, 20_000);
        assert_eq!(scheduler.tick_count(), 100_000);
    }

    #[test]
    fn test_multiple_workers_due_on_one_tick_all_fire() {
        let mut scheduler: Scheduler<Ctx, 4, 4> = Scheduler::new();
        scheduler.add_work(count_fast, Duration::from_millis(20));
        scheduler.add_work(count_slow, Duration::from_millis(40));

        let mut ctx = Ctx::default();
        for _ in 0..4 {
            scheduler.tick(&mut ctx);
        }
        assert_eq!(ctx.fast, 4);
        assert_eq!(ctx.slow, 2);
    }

    #[test]
    fn test_identity_replace() {
        let mut scheduler: Scheduler<Ctx, 4, 4> = Scheduler::new();
        scheduler.add_work(count_fast, Duration::from_millis(100));
        scheduler.add_work(count_fast, Duration::from_millis(100));
        assert_eq!(scheduler.worker_count(), 1);

        let mut ctx = Ctx::default();
        for _ in 0..5 {
            scheduler.tick(&mut ctx);
        }
        assert_eq!(ctx.fast, 1);
    }

    #[test]
    fn test_zero_period_rejected() {
        let mut scheduler: Scheduler<Ctx, 4, 4> = Scheduler::new();
        scheduler.add_work(count_fast, Duration::from_millis(0));
        assert_eq!(scheduler.worker_count(), 0);
    }

    #[test]
    fn test_del_work() {
        let mut scheduler: Scheduler<Ctx, 4, 4> = Scheduler::new();
        scheduler.add_work(count_fast, Duration::from_millis(20));
        scheduler.add_work(count_slow, Duration::from_millis(20));

        let mut ctx = Ctx::default();
        scheduler.tick(&mut ctx);
        assert_eq!((ctx.fast, ctx.slow), (1, 1));

        scheduler.del_work(count_fast);
        assert_eq!(scheduler.worker_count(), 1);
        scheduler.tick(&mut ctx);
        assert_eq!((ctx.fast, ctx.slow), (1, 2));

        // Removing an unknown worker is a no-op.
        scheduler.del_work(count_fast);
        assert_eq!(scheduler.worker_count(), 1);
    }

    #[test]
    fn test_del_last_work_and_del_works() {
        let mut scheduler: Scheduler<Ctx, 4, 4> = Scheduler::new();
        scheduler.add_work(count_fast, Duration::from_millis(20));
        scheduler.add_work(count_slow, Duration::from_millis(20));

        scheduler.del_last_work();
        assert_eq!(scheduler.worker_count(), 1);

        let mut ctx = Ctx::default();
        scheduler.tick(&mut ctx);
        assert_eq!((ctx.fast, ctx.slow), (1, 0));

        scheduler.del_works();
        assert_eq!(scheduler.worker_count(), 0);
        scheduler.tick(&mut ctx);
        assert_eq!((ctx.fast, ctx.slow), (1, 0));
    }

    #[test]
    fn test_deinit_stops_dispatch() {
        let mut scheduler: Scheduler<Ctx, 4, 4> = Scheduler::new();
        scheduler.add_work(count_fast, Duration::from_millis(20));

        let mut ctx = Ctx::default();
        scheduler.tick(&mut ctx);
        assert_eq!(ctx.fast, 1);

        scheduler.deinit();
        assert_eq!(scheduler.worker_count(), 0);

        let before = scheduler.tick_count();
        scheduler.tick(&mut ctx);
        assert_eq!(ctx.fast, 1);
        assert_eq!(scheduler.tick_count(), before);
    }

    #[test]
    fn test_failing_worker_is_disabled_but_tick_continues() {
        let mut scheduler: Scheduler<Ctx, 4, 4> = Scheduler::new();
        scheduler.add_work(always_fail, Duration::from_millis(20));
        scheduler.add_work(count_fast, Duration::from_millis(20));

        let mut ctx = Ctx::default();
        scheduler.tick(&mut ctx);
        // The worker after the failing one still fired on the same tick.
        assert_eq!(ctx.fast, 1);

        // The failing worker stays registered but disabled.
        assert_eq!(scheduler.worker_count(), 2);
        scheduler.tick(&mut ctx);
        assert_eq!(ctx.fast, 2);
    }

    #[test]
    fn test_offloaded_work_runs_outside_the_tick() {
        static QUEUE: OffloadQueue<Ctx, 4> = OffloadQueue::new();

        let mut scheduler: Scheduler<Ctx, 4, 4> =
            Scheduler::new().with_offload(QUEUE.sender());
        scheduler.add_offloaded_work(count_offloaded, Duration::from_millis(20));

        let mut ctx = Ctx::default();
        scheduler.tick(&mut ctx);
        // Nothing ran inline; the callback sits in the queue.
        assert_eq!(ctx.offloaded, 0);

        let ran = QUEUE.receiver().run_pending(&mut ctx);
        assert_eq!(ran, 1);
        assert_eq!(ctx.offloaded, 1);
    }

    #[test]
    fn test_offload_queue_capacity_bounds_dispatch() {
        static QUEUE: OffloadQueue<Ctx, 1> = OffloadQueue::new();

        let mut scheduler: Scheduler<Ctx, 4, 1> =
            Scheduler::new().with_offload(QUEUE.sender());
        scheduler.add_offloaded_work(count_offloaded, Duration::from_millis(20));
        scheduler.add_offloaded_work(count_fast, Duration::from_millis(20));

        let mut ctx = Ctx::default();
        scheduler.tick(&mut ctx);

        // Only the first dispatch fit; the overflow was dropped.
        let ran = QUEUE.receiver().run_pending(&mut ctx);
        assert_eq!(ran, 1);
        assert_eq!(ctx.offloaded, 1);
        assert_eq!(ctx.fast, 0);
    }
}
