//! Feed-now dialog workflow, driven purely through key events.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use pawfeed::data::Catalog;
use pawfeed::screens::home::{HomeScreen, PORTION_DEFAULT, PORTION_MAX, PORTION_STEP};
use pawfeed::screens::{Screen, ScreenAction, ScreenContext};
use pawfeed::ui::Screen as ScreenId;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn adjust_and_dispense_through_keys() -> Result<()> {
    let catalog = Catalog::sample();
    let ctx = ScreenContext::new(&catalog);
    let mut home = HomeScreen::new();

    // Open, step up twice, dispense
    home.handle_event(press(KeyCode::Char('f')), &ctx)?;
    assert!(home.feed_dialog().open);
    home.handle_event(press(KeyCode::Right), &ctx)?;
    home.handle_event(press(KeyCode::Right), &ctx)?;
    assert_eq!(
        home.feed_dialog().portion_grams,
        PORTION_DEFAULT + 2 * PORTION_STEP
    );

    let action = home.handle_event(press(KeyCode::Enter), &ctx)?;
    assert_eq!(action, ScreenAction::None);
    assert!(!home.feed_dialog().open);
    Ok(())
}

#[test]
fn dialog_swallows_navigation_keys_while_open() -> Result<()> {
    let catalog = Catalog::sample();
    let ctx = ScreenContext::new(&catalog);
    let mut home = HomeScreen::new();

    home.handle_event(press(KeyCode::Char('f')), &ctx)?;
    // 'a' would open analytics from the dashboard, but the dialog is modal
    let action = home.handle_event(press(KeyCode::Char('a')), &ctx)?;
    assert_eq!(action, ScreenAction::None);
    assert!(home.feed_dialog().open);

    // Esc closes the dialog rather than quitting the app
    let action = home.handle_event(press(KeyCode::Esc), &ctx)?;
    assert_eq!(action, ScreenAction::None);
    assert!(!home.feed_dialog().open);
    Ok(())
}

#[test]
fn stepping_never_escapes_the_range() -> Result<()> {
    let catalog = Catalog::sample();
    let ctx = ScreenContext::new(&catalog);
    let mut home = HomeScreen::new();
    home.handle_event(press(KeyCode::Char('f')), &ctx)?;

    for _ in 0..50 {
        home.handle_event(press(KeyCode::Right), &ctx)?;
    }
    assert_eq!(home.feed_dialog().portion_grams, PORTION_MAX);

    for _ in 0..50 {
        home.handle_event(press(KeyCode::Left), &ctx)?;
    }
    assert_eq!(home.feed_dialog().portion_grams, 0);
    Ok(())
}

#[test]
fn portion_resets_when_the_dashboard_is_reentered() -> Result<()> {
    let catalog = Catalog::sample();
    let ctx = ScreenContext::new(&catalog);

    let mut home = HomeScreen::new();
    home.handle_event(press(KeyCode::Char('f')), &ctx)?;
    home.handle_event(press(KeyCode::Right), &ctx)?;
    home.handle_event(press(KeyCode::Esc), &ctx)?;
    assert_eq!(
        home.feed_dialog().portion_grams,
        PORTION_DEFAULT + PORTION_STEP
    );

    // Leaving the dashboard drops the controller
    let action = home.handle_event(press(KeyCode::Char('3')), &ctx)?;
    assert_eq!(action, ScreenAction::Navigate(ScreenId::PetProfiles));
    drop(home);

    // A fresh controller starts from the default portion
    let home = HomeScreen::new();
    assert_eq!(home.feed_dialog().portion_grams, PORTION_DEFAULT);
    assert!(!home.feed_dialog().open);
    Ok(())
}
