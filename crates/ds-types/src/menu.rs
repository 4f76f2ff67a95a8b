//! Open/closed state of the navigation bar menus and their idle timeout.
//!
//! Every change bumps a generation counter. An idle timer is armed with the
//! generation current at the time it started; when it fires it only closes
//! the menus if nothing happened in between.

use std::{future::Future, time::Duration};

/// Open menus close after this long without interaction.
pub const MENU_IDLE_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAnchor {
    /// Navigation links (mobile only).
    Left,
    /// Edit affordances (mobile only).
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    left: bool,
    right: bool,
    generation: u64,
}

/// Identifies the menu state an idle timer was started for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdleTicket(u64);

impl MenuState {
    pub fn is_open(&self, anchor: MenuAnchor) -> bool {
        match anchor {
            MenuAnchor::Left => self.left,
            MenuAnchor::Right => self.right,
        }
    }

    pub fn any_open(&self) -> bool {
        self.left || self.right
    }

    pub fn open(&mut self, anchor: MenuAnchor) {
        match anchor {
            MenuAnchor::Left => self.left = true,
            MenuAnchor::Right => self.right = true,
        }
        self.generation += 1;
    }

    pub fn toggle(&mut self, anchor: MenuAnchor) {
        if self.is_open(anchor) {
            self.close_all();
        } else {
            self.open(anchor);
        }
    }

    pub fn close_all(&mut self) {
        if self.any_open() {
            self.left = false;
            self.right = false;
            self.generation += 1;
        }
    }

    /// Record an interaction with an open menu, restarting its idle period.
    pub fn touch(&mut self) {
        if self.any_open() {
            self.generation += 1;
        }
    }

    /// Ticket for an idle timer, if any menu is open.
    pub fn idle_ticket(&self) -> Option<IdleTicket> {
        self.any_open().then_some(IdleTicket(self.generation))
    }

    /// Close the menus if `ticket` is still current. Returns whether it was.
    pub fn expire(&mut self, ticket: IdleTicket) -> bool {
        if self.any_open() && ticket.0 == self.generation {
            self.close_all();
            true
        } else {
            false
        }
    }
}

/// Wait out `idle`, then hand the ticket to `expire`.
pub async fn close_when_idle<F, E>(idle: F, ticket: IdleTicket, expire: E) -> bool
where
    F: Future<Output = ()>,
    E: FnOnce(IdleTicket) -> bool,
{
    idle.await;
    expire(ticket)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn test_closed_menu_has_no_ticket() {
        let mut menu = MenuState::default();
        assert!(menu.idle_ticket().is_none());
        menu.touch();
        assert!(menu.idle_ticket().is_none());
    }

    #[test]
    fn test_stale_ticket_does_not_close() {
        let mut menu = MenuState::default();
        menu.open(MenuAnchor::Right);
        let first = menu.idle_ticket().unwrap();

        menu.touch();
        assert!(!menu.expire(first));
        assert!(menu.is_open(MenuAnchor::Right));

        let second = menu.idle_ticket().unwrap();
        assert!(menu.expire(second));
        assert!(!menu.any_open());
    }

    #[test]
    fn test_toggle_closes_everything() {
        let mut menu = MenuState::default();
        menu.open(MenuAnchor::Left);
        menu.open(MenuAnchor::Right);
        menu.toggle(MenuAnchor::Left);
        assert!(!menu.any_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_menu_closes_after_idle_timeout() {
        let menu = Rc::new(RefCell::new(MenuState::default()));
        menu.borrow_mut().open(MenuAnchor::Right);
        let ticket = menu.borrow().idle_ticket().unwrap();

        let started = tokio::time::Instant::now();
        let closed = close_when_idle(tokio::time::sleep(MENU_IDLE_TIMEOUT), ticket, |t| menu.borrow_mut().expire(t)).await;

        assert!(closed);
        assert!(started.elapsed() >= MENU_IDLE_TIMEOUT);
        assert!(!menu.borrow().any_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_interaction_restarts_idle_period() {
        let menu = Rc::new(RefCell::new(MenuState::default()));
        menu.borrow_mut().open(MenuAnchor::Left);
        let ticket = menu.borrow().idle_ticket().unwrap();

        tokio::time::sleep(Duration::from_millis(4000)).await;
        menu.borrow_mut().touch();

        let closed = close_when_idle(tokio::time::sleep(Duration::from_millis(1000)), ticket, |t| menu.borrow_mut().expire(t)).await;
        assert!(!closed);
        assert!(menu.borrow().is_open(MenuAnchor::Left));
    }
}
