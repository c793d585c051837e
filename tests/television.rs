// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the television state machine.

use proptest::prelude::*;
use television_lib::{
    Limits, MAX_CHANNEL, MAX_VOLUME, MIN_CHANNEL, MIN_VOLUME, RemoteCommand, SharedTelevision,
    Television, parse_sequence,
};

const INITIAL: &str = "Power = False, Channel = 0, Volume = 0";

fn powered() -> Television {
    let mut tv = Television::new();
    tv.toggle_power();
    tv
}

// ============================================================================
// Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn fresh_television_renders_initial_state() {
        assert_eq!(Television::new().render(), INITIAL);
        assert_eq!(Television::default().to_string(), INITIAL);
    }

    #[test]
    fn double_power_toggle_restores_everything() {
        let mut tv = powered();
        tv.channel_up();
        let before = tv.clone();
        tv.toggle_power();
        tv.toggle_power();
        assert_eq!(tv, before);
    }

    #[test]
    fn channel_wrap_up_then_down() {
        let mut tv = powered();
        let mut seen = Vec::new();
        for _ in 0..5 {
            tv.channel_up();
            seen.push(tv.channel());
        }
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);

        seen.clear();
        for _ in 0..3 {
            tv.channel_down();
            seen.push(tv.channel());
        }
        assert_eq!(seen, vec![0, 3, 2]);
    }

    #[test]
    fn volume_never_leaves_range() {
        let mut tv = powered();
        for _ in 0..5 {
            tv.volume_up();
        }
        assert_eq!(tv.volume(), MAX_VOLUME);
        for _ in 0..5 {
            tv.volume_down();
        }
        assert_eq!(tv.volume(), MIN_VOLUME);
    }

    #[test]
    fn mute_remembers_and_restores() {
        let mut tv = powered();
        tv.volume_up();
        tv.volume_up();
        assert!(tv.render().ends_with("Volume = 2"));
        tv.toggle_mute();
        assert!(tv.render().ends_with("Volume = 0"));
        tv.volume_up();
        assert!(tv.render().ends_with("Volume = 2"));
        tv.toggle_mute();
        assert!(tv.render().ends_with("Volume = 0"));
    }

    #[test]
    fn commands_ignored_while_off() {
        let mut tv = Television::new();
        tv.toggle_mute();
        tv.volume_up();
        tv.channel_up();
        assert_eq!(tv.render(), INITIAL);
    }

    #[test]
    fn text_driven_session() {
        let mut tv = Television::new();
        let applied = tv.apply_all(parse_sequence("mute, power, vol+, vol+, mute, ch-").unwrap());
        assert_eq!(applied, 5);
        assert!(tv.is_muted());
        assert_eq!(tv.render(), "Power = True, Channel = 3, Volume = 0");
    }

    #[test]
    fn shared_handle_matches_plain_television() {
        let commands = parse_sequence("power ch+ vol+ mute vol- ch-").unwrap();
        let mut plain = Television::new();
        plain.apply_all(commands.iter().copied());

        let shared = SharedTelevision::new();
        for cmd in commands {
            shared.apply(cmd);
        }
        assert_eq!(shared.snapshot(), plain.snapshot());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut tv = powered();
        tv.channel_up();
        let json = serde_json::to_value(tv.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "power": "ON",
                "muted": false,
                "volume": 0,
                "channel": 1
            })
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

fn arb_command() -> impl Strategy<Value = RemoteCommand> {
    prop::sample::select(RemoteCommand::ALL.to_vec())
}

fn arb_limits() -> impl Strategy<Value = Limits> {
    (0u8..=20, 0u8..=20, 0u8..=20, 0u8..=20).prop_map(|(a, b, c, d)| {
        Limits::new(a.min(b), a.max(b), c.min(d), c.max(d))
            .expect("ordered bounds are always valid")
    })
}

proptest! {
    #[test]
    fn invariants_hold_after_every_command(
        commands in prop::collection::vec(arb_command(), 0..200),
    ) {
        let mut tv = Television::new();
        for cmd in commands {
            tv.apply(cmd);
            prop_assert!((MIN_VOLUME..=MAX_VOLUME).contains(&tv.volume()));
            prop_assert!((MIN_CHANNEL..=MAX_CHANNEL).contains(&tv.channel()));
            if tv.is_muted() {
                prop_assert_eq!(tv.volume(), MIN_VOLUME);
            }
        }
    }

    #[test]
    fn invariants_hold_for_custom_limits(
        limits in arb_limits(),
        commands in prop::collection::vec(arb_command(), 0..200),
    ) {
        let mut tv = Television::with_limits(limits);
        for cmd in commands {
            tv.apply(cmd);
            prop_assert!((limits.min_volume()..=limits.max_volume()).contains(&tv.volume()));
            prop_assert!((limits.min_channel()..=limits.max_channel()).contains(&tv.channel()));
            if tv.is_muted() {
                prop_assert_eq!(tv.volume(), limits.min_volume());
            }
        }
    }

    #[test]
    fn everything_but_power_is_ignored_while_off(
        commands in prop::collection::vec(arb_command(), 0..50),
    ) {
        let mut tv = Television::new();
        for cmd in commands.into_iter().filter(|c| !c.works_when_off()) {
            prop_assert!(!tv.apply(cmd));
        }
        prop_assert_eq!(tv.render(), INITIAL);
    }

    #[test]
    fn channel_up_then_down_is_identity(
        start in 0u8..=MAX_CHANNEL,
        limits in arb_limits(),
    ) {
        let mut tv = Television::with_limits(limits);
        tv.toggle_power();
        let span = limits.channel_count();
        for _ in 0..u16::from(start) % span {
            tv.channel_up();
        }
        let before = tv.channel();
        tv.channel_up();
        tv.channel_down();
        prop_assert_eq!(tv.channel(), before);
    }

    #[test]
    fn power_toggle_pairs_leave_state_unchanged(
        commands in prop::collection::vec(arb_command(), 0..50),
    ) {
        let mut tv = Television::new();
        tv.apply_all(commands);
        let before = tv.clone();
        tv.toggle_power();
        tv.toggle_power();
        prop_assert_eq!(tv, before);
    }
}
