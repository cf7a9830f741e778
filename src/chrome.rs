//! Overlay chrome around the surface: filter bar, caption and about panel.
//!
//! The caption is never swapped in while something it must replace is
//! still fading out. A queued caption becomes current only once the filter
//! bar is fully hidden and the previous caption has faded to zero.

use web_time::{Duration, Instant};

use crate::animation::fade::Fade;
use crate::store::Caption;

/// Opacity state of every overlay element.
#[derive(Debug, Clone)]
pub struct Chrome {
    filter_bar: Fade,
    caption_fade: Fade,
    caption: Option<Caption>,
    queued: Option<Caption>,
    about_panel: Fade,
    caption_duration: Duration,
}

impl Chrome {
    /// Filter bar visible, caption and about panel hidden.
    #[must_use]
    pub fn new(now: Instant, caption_duration: Duration) -> Self {
        Self {
            filter_bar: Fade::new(1.0, now),
            caption_fade: Fade::new(0.0, now),
            caption: None,
            queued: None,
            about_panel: Fade::new(0.0, now),
            caption_duration,
        }
    }

    /// Change the caption fade duration for fades started from now on.
    pub fn set_caption_duration(&mut self, duration: Duration) {
        self.caption_duration = duration;
    }

    /// Fade the filter bar out.
    pub fn hide_filter_bar(&mut self, now: Instant, duration: Duration) {
        self.filter_bar.fade_to(now, 0.0, duration, Duration::ZERO);
    }

    /// Fade the filter bar back in after `delay`.
    pub fn show_filter_bar(
        &mut self,
        now: Instant,
        duration: Duration,
        delay: Duration,
    ) {
        self.filter_bar.fade_to(now, 1.0, duration, delay);
    }

    /// Show `caption` as soon as nothing else occupies its slot.
    ///
    /// A caption already on screen fades out first.
    pub fn queue_caption(&mut self, now: Instant, caption: Caption) {
        self.queued = Some(caption);
        if self.caption_fade.target() > 0.0 {
            self.caption_fade
                .fade_to(now, 0.0, self.caption_duration, Duration::ZERO);
        }
    }

    /// Fade the caption out and drop any queued caption.
    pub fn hide_caption(&mut self, now: Instant) {
        self.queued = None;
        if self.caption_fade.target() > 0.0 {
            self.caption_fade
                .fade_to(now, 0.0, self.caption_duration, Duration::ZERO);
        }
    }

    /// Fade the about panel in or out.
    pub fn set_about_panel(
        &mut self,
        now: Instant,
        visible: bool,
        duration: Duration,
    ) {
        let target = if visible { 1.0 } else { 0.0 };
        self.about_panel.fade_to(now, target, duration, Duration::ZERO);
    }

    /// Run completion actions whose fades have finished by `now`.
    pub fn tick(&mut self, now: Instant) {
        if !self.caption_fade.is_hidden(now) {
            return;
        }
        if self.queued.is_some() && self.filter_bar.is_hidden(now) {
            self.caption = self.queued.take();
            self.caption_fade.fade_to(
                now,
                1.0,
                self.caption_duration,
                Duration::ZERO,
            );
        } else if self.queued.is_none() {
            self.caption = None;
        }
    }

    /// Filter bar opacity at `now`.
    #[must_use]
    pub fn filter_bar_opacity(&self, now: Instant) -> f32 {
        self.filter_bar.value(now)
    }

    /// The caption currently occupying the caption slot.
    #[must_use]
    pub fn caption(&self) -> Option<&Caption> {
        self.caption.as_ref()
    }

    /// Caption opacity at `now`.
    #[must_use]
    pub fn caption_opacity(&self, now: Instant) -> f32 {
        self.caption_fade.value(now)
    }

    /// About panel opacity at `now`.
    #[must_use]
    pub fn about_panel_opacity(&self, now: Instant) -> f32 {
        self.about_panel.value(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn caption(title: &str) -> Caption {
        Caption {
            title: title.into(),
            meta: "2020 · ink".into(),
        }
    }

    #[test]
    fn caption_waits_for_filter_bar_fade() {
        let t0 = Instant::now();
        let mut chrome = Chrome::new(t0, ms(200));
        chrome.hide_filter_bar(t0, ms(300));
        chrome.queue_caption(t0, caption("A"));

        chrome.tick(t0 + ms(150));
        assert!(chrome.caption().is_none());

        chrome.tick(t0 + ms(300));
        assert_eq!(chrome.caption().map(|c| c.title.as_str()), Some("A"));
        assert_eq!(chrome.caption_opacity(t0 + ms(500)), 1.0);
    }

    #[test]
    fn caption_swap_waits_for_fade_out() {
        let t0 = Instant::now();
        let mut chrome = Chrome::new(t0, ms(200));
        chrome.hide_filter_bar(t0, ms(0));
        chrome.queue_caption(t0, caption("A"));
        chrome.tick(t0);

        let t1 = t0 + ms(400);
        chrome.queue_caption(t1, caption("B"));
        chrome.tick(t1 + ms(100));
        assert_eq!(chrome.caption().map(|c| c.title.as_str()), Some("A"));

        chrome.tick(t1 + ms(200));
        assert_eq!(chrome.caption().map(|c| c.title.as_str()), Some("B"));
    }

    #[test]
    fn hidden_caption_is_cleared() {
        let t0 = Instant::now();
        let mut chrome = Chrome::new(t0, ms(200));
        chrome.hide_filter_bar(t0, ms(0));
        chrome.queue_caption(t0, caption("A"));
        chrome.tick(t0);

        let t1 = t0 + ms(400);
        chrome.hide_caption(t1);
        chrome.show_filter_bar(t1, ms(300), Duration::ZERO);
        chrome.tick(t1 + ms(200));
        assert!(chrome.caption().is_none());
        assert_eq!(chrome.filter_bar_opacity(t1 + ms(300)), 1.0);
    }
}
