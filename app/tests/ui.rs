// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::{ComponentHandle, Model};
use todo_list::{Settings, models::ColorSchemeSetting, ui};

fn rows(window: &ui::MainWindow) -> Vec<(String, bool)> {
    window
        .global::<ui::TaskListAdapter>()
        .get_tasks()
        .iter()
        .map(|item| (item.text.to_string(), item.completed))
        .collect()
}

#[test]
fn test_submit_and_toggle() {
    i_slint_backend_testing::init_no_event_loop();

    let window = todo_list::init(&Settings::default()).unwrap();
    let input = window.global::<ui::TaskInputAdapter>();
    let list = window.global::<ui::TaskListAdapter>();

    assert!(rows(&window).is_empty());
    assert_eq!(list.get_total_count(), 0);

    assert!(input.invoke_submit("Buy milk".into()));
    assert!(input.invoke_submit("Walk the dog ".into()));
    assert!(!input.invoke_submit("   ".into()));

    assert_eq!(
        rows(&window),
        [("Buy milk".to_owned(), false), ("Walk the dog ".to_owned(), false)]
    );
    assert_eq!(list.get_total_count(), 2);
    assert_eq!(list.get_remaining_count(), 2);

    list.invoke_toggle_task(1);
    assert_eq!(rows(&window)[1], ("Walk the dog ".to_owned(), true));
    assert_eq!(list.get_remaining_count(), 1);

    list.invoke_toggle_task(-1);
    list.invoke_toggle_task(2);
    assert_eq!(list.get_total_count(), 2);
    assert_eq!(list.get_remaining_count(), 1);

    list.invoke_toggle_task(1);
    assert_eq!(list.get_remaining_count(), 2);
}

#[test]
fn test_fixed_color_scheme() {
    i_slint_backend_testing::init_no_event_loop();

    let window =
        todo_list::init(&Settings { color_scheme: ColorSchemeSetting::Dark }).unwrap();
    let theme = window.global::<ui::Theme>();

    assert!(theme.get_dark());
    assert_eq!(theme.get_colors(), theme.get_dark_colors());

    let window =
        todo_list::init(&Settings { color_scheme: ColorSchemeSetting::Light }).unwrap();
    let theme = window.global::<ui::Theme>();

    assert!(!theme.get_dark());
    assert_eq!(theme.get_colors().background, slint::Color::from_rgb_u8(0xff, 0xff, 0xff));
}
