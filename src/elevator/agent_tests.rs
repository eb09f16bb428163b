/*
 * Unit tests for the car agent
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_agent_init
 * - test_assign_ignores_duplicate
 * - test_assign_combines_once
 * - test_assign_already_covered_by_merged_stop
 * - test_idle_starts_head_task
 * - test_idle_with_empty_queue_lights_both
 * - test_idle_reissues_lost_destination
 * - test_passing_floor_prioritizes
 * - test_passing_floor_skipped_when_loaded
 * - test_passing_floor_ignores_opposite_call
 * - test_stop_completes_and_clears_call
 * - test_stop_keeps_opposite_call
 * - test_stop_with_calls_both_ways
 * - test_served_history_capped
 * - test_reorder_continues_sweep
 * - test_no_task_lost
 * - test_out_of_range_floor_ignored
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod agent_tests {
    use crate::config::DispatchConfig;
    use crate::elevator::{Car, CarAgent};
    use crate::floors::FloorRegistry;
    use crate::replay::{CarCommand, ScriptedCar};
    use crate::shared::Direction::{Down, Up};
    use crate::shared::TaskKind::{Both, Pickup};
    use crate::shared::{Heading, Indicator};
    use crate::task::Task;

    const N_FLOORS: u8 = 10;

    fn setup_agent(floor: u8) -> (CarAgent<ScriptedCar>, FloorRegistry) {
        // Default configuration
        let config = DispatchConfig::default();
        let car = ScriptedCar::new(floor, 5);

        (CarAgent::new(car, &config, N_FLOORS), FloorRegistry::new(N_FLOORS))
    }

    #[test]
    fn test_agent_init() {
        // Arrange
        let (agent, _registry) = setup_agent(2);

        // Assert
        assert_eq!(agent.state().position, 2.0);
        assert_eq!(agent.state().capacity, 5);
        assert_eq!(agent.state().ongoing, None);
        assert!(agent.state().pending.is_empty());
        assert_eq!(agent.state().indicator, Indicator::Both);
    }

    #[test]
    fn test_assign_ignores_duplicate() {
        // Arrange
        let (mut agent, _registry) = setup_agent(0);

        // Act
        agent.assign(Task::pickup(3, Up));
        agent.assign(Task::pickup(3, Up));

        // Assert
        assert_eq!(agent.state().pending, vec![Task::pickup(3, Up)]);
    }

    #[test]
    fn test_assign_combines_once() {
        // Arrange
        let (mut agent, _registry) = setup_agent(0);
        agent.assign(Task::pickup(3, Up));
        agent.assign(Task::pickup(3, Down));

        // Act
        agent.assign(Task::dropoff(3));

        // Assert
        assert_eq!(
            agent.state().pending,
            vec![Task::new(3, Up, Both), Task::pickup(3, Down)]
        );
    }

    #[test]
    fn test_assign_already_covered_by_merged_stop() {
        // Arrange
        let (mut agent, _registry) = setup_agent(0);
        agent.assign(Task::dropoff(3));
        agent.assign(Task::pickup(3, Up));

        // Act
        agent.assign(Task::dropoff(3));
        agent.assign(Task::pickup(3, Up));

        // Assert
        assert_eq!(agent.state().pending, vec![Task::new(3, Up, Both)]);
    }

    #[test]
    fn test_idle_starts_head_task() {
        // Arrange
        let (mut agent, _registry) = setup_agent(0);
        agent.assign(Task::pickup(4, Down));

        // Act
        agent.on_idle();

        // Assert
        assert_eq!(agent.state().ongoing, Some(Task::pickup(4, Down)));
        assert!(agent.state().pending.is_empty());
        assert_eq!(agent.state().indicator, Indicator::Down);
        assert_eq!(
            agent.car().commands(),
            &[
                CarCommand::SetIndicators { up: false, down: true },
                CarCommand::GoToFloor { floor: 4, now: false },
            ]
        );
    }

    #[test]
    fn test_idle_with_empty_queue_lights_both() {
        // Arrange
        let (mut agent, _registry) = setup_agent(0);
        agent.assign(Task::dropoff(6));
        agent.on_idle();

        // Act
        agent.car_mut().arrive(6);
        agent.on_idle();

        // Assert
        assert_eq!(agent.state().ongoing, None);
        assert_eq!(agent.state().served, vec![Task::dropoff(6)]);
        assert_eq!(agent.state().indicator, Indicator::Both);
        assert_eq!(agent.car().lamps(), (true, true));
    }

    #[test]
    fn test_idle_reissues_lost_destination() {
        // Arrange
        let (mut agent, _registry) = setup_agent(0);
        agent.assign(Task::dropoff(5));
        agent.on_idle();
        agent.car_mut().take_commands();

        // Act
        agent.on_idle();

        // Assert
        assert_eq!(agent.state().ongoing, Some(Task::dropoff(5)));
        assert_eq!(
            agent.car().commands(),
            &[CarCommand::GoToFloor { floor: 5, now: false }]
        );
    }

    #[test]
    fn test_passing_floor_prioritizes() {
        // Arrange
        let (mut agent, _registry) = setup_agent(0);
        agent.assign(Task::dropoff(8));
        agent.on_idle();
        agent.assign(Task::pickup(3, Up));
        agent.car_mut().set_status(3, 0.2);

        // Act
        agent.on_passing_floor(3, Heading::Up);

        // Assert
        assert_eq!(agent.state().ongoing, Some(Task::pickup(3, Up)));
        assert_eq!(agent.state().pending, vec![Task::dropoff(8)]);
        assert_eq!(agent.car().destination_queue(), &[3, 8]);
        assert_eq!(
            agent.car().commands().last(),
            Some(&CarCommand::GoToFloor { floor: 3, now: true })
        );
    }

    #[test]
    fn test_passing_floor_skipped_when_loaded() {
        // Arrange
        let (mut agent, _registry) = setup_agent(0);
        agent.assign(Task::dropoff(8));
        agent.on_idle();
        agent.assign(Task::pickup(3, Up));
        agent.car_mut().set_status(3, 0.7);

        // Act
        agent.on_passing_floor(3, Heading::Up);

        // Assert
        assert_eq!(agent.state().ongoing, Some(Task::dropoff(8)));
        assert_eq!(agent.state().pending, vec![Task::pickup(3, Up)]);
        assert_eq!(agent.state().heading, Some(Heading::Up));
    }

    #[test]
    fn test_passing_floor_ignores_opposite_call() {
        // Arrange
        let (mut agent, _registry) = setup_agent(0);
        agent.assign(Task::dropoff(8));
        agent.on_idle();
        agent.assign(Task::pickup(3, Down));

        // Act
        agent.car_mut().set_status(3, 0.0);
        agent.on_passing_floor(3, Heading::Up);

        // Assert
        assert_eq!(agent.state().ongoing, Some(Task::dropoff(8)));
        assert_eq!(agent.state().pending, vec![Task::pickup(3, Down)]);
    }

    #[test]
    fn test_stop_completes_and_clears_call() {
        // Arrange
        let (mut agent, mut registry) = setup_agent(0);
        let call = registry.on_up_button_pressed(3).unwrap();
        registry.on_down_button_pressed(3);
        agent.assign(call);
        agent.on_idle();
        agent.assign(Task::dropoff(6));

        // Act
        agent.car_mut().arrive(3);
        agent.on_stopped_at_floor(3, &mut registry);

        // Assert
        assert_eq!(agent.state().ongoing, None);
        assert_eq!(agent.state().served, vec![Task::pickup(3, Up)]);
        assert_eq!(agent.state().pending, vec![Task::dropoff(6)]);
        assert_eq!(agent.state().indicator, Indicator::Up);
        assert!(!registry.is_requested(3, Heading::Up));
        assert!(registry.is_requested(3, Heading::Down));
    }

    #[test]
    fn test_stop_keeps_opposite_call() {
        // Arrange
        let (mut agent, mut registry) = setup_agent(0);
        registry.on_down_button_pressed(3);
        agent.assign(Task::dropoff(3));
        agent.on_idle();
        agent.assign(Task::dropoff(6));
        agent.assign(Task::pickup(3, Down));

        // Act
        agent.car_mut().arrive(3);
        agent.on_stopped_at_floor(3, &mut registry);

        // Assert
        assert_eq!(agent.state().served, vec![Task::dropoff(3)]);
        assert_eq!(
            agent.state().pending,
            vec![Task::dropoff(6), Task::pickup(3, Down)]
        );
        assert_eq!(agent.state().indicator, Indicator::Up);
        assert!(registry.is_requested(3, Heading::Down));
    }

    #[test]
    fn test_stop_with_calls_both_ways() {
        // Arrange
        let (mut agent, mut registry) = setup_agent(0);
        let up = registry.on_up_button_pressed(3).unwrap();
        let down = registry.on_down_button_pressed(3).unwrap();
        agent.assign(up);
        agent.assign(down);
        agent.on_idle();

        // Act
        agent.car_mut().arrive(3);
        agent.on_stopped_at_floor(3, &mut registry);

        // Assert
        assert_eq!(agent.state().served, vec![up]);
        assert_eq!(agent.state().pending, vec![down]);
        assert_eq!(agent.state().indicator, Indicator::Up);
        assert!(!registry.is_requested(3, Heading::Up));
        assert!(registry.is_requested(3, Heading::Down));

        // Act
        agent.on_idle();
        agent.on_stopped_at_floor(3, &mut registry);

        // Assert
        assert_eq!(agent.state().served, vec![up, down]);
        assert!(agent.state().pending.is_empty());
        assert_eq!(agent.state().ongoing, None);
        assert_eq!(agent.state().indicator, Indicator::Down);
        assert!(!registry.is_requested(3, Heading::Down));
    }

    #[test]
    fn test_served_history_capped() {
        // Arrange
        let config = DispatchConfig {
            served_history: 2,
            ..DispatchConfig::default()
        };
        let mut agent = CarAgent::new(ScriptedCar::new(0, 5), &config, N_FLOORS);
        let mut registry = FloorRegistry::new(N_FLOORS);

        // Act
        for floor in 1..=3 {
            agent.assign(Task::dropoff(floor));
            agent.on_idle();
            agent.car_mut().arrive(floor);
            agent.on_stopped_at_floor(floor, &mut registry);
        }

        // Assert
        assert_eq!(agent.state().served, vec![Task::dropoff(2), Task::dropoff(3)]);
    }

    #[test]
    fn test_reorder_continues_sweep() {
        // Arrange
        let (mut agent, _registry) = setup_agent(5);
        agent.on_passing_floor(5, Heading::Up);

        // Act
        agent.assign(Task::new(2, Up, Pickup));
        agent.assign(Task::new(7, Up, Pickup));
        agent.assign(Task::new(4, Down, Pickup));

        // Assert
        let floors: Vec<u8> = agent.state().pending.iter().map(|task| task.floor).collect();
        assert_eq!(floors, vec![7, 4, 2]);
    }

    #[test]
    fn test_no_task_lost() {
        // Arrange
        let (mut agent, mut registry) = setup_agent(0);
        let assigned = vec![
            Task::dropoff(7),
            Task::pickup(2, Up),
            Task::pickup(5, Down),
            Task::dropoff(9),
            Task::pickup(4, Up),
        ];

        // Act
        agent.assign(assigned[0]);
        agent.on_idle();
        agent.assign(assigned[1]);
        agent.assign(assigned[2]);
        agent.car_mut().set_status(2, 0.1);
        agent.on_passing_floor(2, Heading::Up);
        agent.car_mut().arrive(2);
        agent.on_stopped_at_floor(2, &mut registry);
        agent.assign(assigned[3]);
        agent.assign(assigned[4]);
        agent.car_mut().set_status(4, 0.1);
        agent.on_passing_floor(4, Heading::Up);
        agent.car_mut().arrive(4);
        agent.on_stopped_at_floor(4, &mut registry);
        agent.on_idle();

        // Assert
        let state = agent.state();
        for task in &assigned {
            let places = state.pending.iter().filter(|t| *t == task).count()
                + state.served.iter().filter(|t| *t == task).count()
                + usize::from(state.ongoing.as_ref() == Some(task));
            assert_eq!(places, 1, "{:?} should be tracked exactly once", task);
        }
        assert_eq!(state.served, vec![Task::pickup(2, Up), Task::pickup(4, Up)]);
    }

    #[test]
    fn test_out_of_range_floor_ignored() {
        // Arrange
        let (mut agent, mut registry) = setup_agent(0);
        let before = agent.state().clone();

        // Act
        agent.on_floor_button_pressed(N_FLOORS);
        agent.on_passing_floor(42, Heading::Down);
        agent.on_stopped_at_floor(N_FLOORS, &mut registry);

        // Assert
        assert_eq!(agent.state(), &before);
        assert!(agent.car().commands().is_empty());
    }
}
