// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one tall column of fixed-height sections inside a single
//! scrollable, stacked under the fixed navigation bar, the floating
//! back-to-top control, and (while starting up) the loading overlay.

use super::section::Section;
use super::{App, Message};
use crate::ui::back_to_top;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::reveal::RevealId;
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeChoice};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport as ScrollViewport;
use iced::widget::{container, mouse_area, Column, Row, Scrollable, Space, Stack, Text};
use iced::widget::Id;
use iced::{Element, Length};
use std::f32::consts::TAU;

pub(super) const PAGE_SCROLL_ID: &str = "portfolio-page";

pub(super) const SKILL_CARDS: [(&str, &str); 3] = [
    ("skill-cloud-title", "skill-cloud-body"),
    ("skill-cicd-title", "skill-cicd-body"),
    ("skill-security-title", "skill-security-body"),
];

pub(super) const EXPERIENCE_CARDS: [(&str, &str); 2] = [
    ("experience-current-role", "experience-current-body"),
    ("experience-previous-role", "experience-previous-body"),
];

pub(super) const PROJECT_CARDS: [(&str, &str); 2] = [
    ("project-pipeline-title", "project-pipeline-body"),
    ("project-cluster-title", "project-cluster-body"),
];

const CARD_HEIGHT: f32 = 220.0;

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let scheme = ColorScheme::for_choice(self.resolved_theme());

        let page = Scrollable::new(self.page_content(&scheme))
            .id(Id::new(PAGE_SCROLL_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: ScrollViewport| {
                Message::Scrolled(viewport.absolute_offset().y)
            });

        // Presses that no control captured close the dropdown.
        let page = mouse_area(page).on_press(Message::OutsideClicked);

        let theme_is_dark = self.resolved_theme() == ThemeChoice::Dark;
        let bar = container(self.navbar.view(&self.i18n, theme_is_dark).map(Message::Navbar))
            .width(Length::Fill);

        let mut layers = Stack::new().push(page).push(bar);

        if back_to_top::visible(self.viewport.offset) {
            layers = layers.push(
                container(back_to_top::view(&self.i18n).map(Message::BackToTop))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Right)
                    .align_y(Vertical::Bottom)
                    .padding(spacing::LG),
            );
        }

        if self.loading.is_visible() {
            let elapsed = self.now.saturating_duration_since(self.launched_at);
            let angle = elapsed.as_secs_f32() * TAU;
            layers = layers.push(self.loading.view(&self.i18n, scheme.accent, angle));
        }

        layers.into()
    }

    fn page_content(&self, scheme: &ColorScheme) -> Element<'_, Message> {
        Column::new()
            .width(Length::Fill)
            .push(self.hero_section(scheme))
            .push(self.about_section())
            .push(self.card_section(Section::Skills, "skills-title", &SKILL_CARDS, &self.skill_reveals))
            .push(self.experience_section())
            .push(self.card_section(
                Section::Projects,
                "projects-title",
                &PROJECT_CARDS,
                &self.project_reveals,
            ))
            .push(self.contact_section())
            .into()
    }

    fn section_frame<'a>(
        &self,
        section: Section,
        content: Element<'a, Message>,
    ) -> Element<'a, Message> {
        container(content)
            .width(Length::Fill)
            .height(Length::Fixed(self.sections.height(section)))
            .padding(spacing::XXL)
            .into()
    }

    fn hero_section(&self, scheme: &ColorScheme) -> Element<'_, Message> {
        let text = Column::new()
            .spacing(spacing::SM)
            .align_x(iced::Alignment::Center)
            .push(
                Text::new(self.i18n.tr("hero-greeting"))
                    .size(typography::LEAD)
                    .color(scheme.text_secondary),
            )
            .push(
                Text::new(self.i18n.tr("hero-name"))
                    .size(typography::HERO)
                    .color(scheme.text_primary),
            )
            .push(
                Text::new(format!("{}▌", self.typing.visible_text()))
                    .size(typography::LEAD)
                    .color(scheme.accent),
            )
            .push(
                Text::new(self.i18n.tr("hero-intro"))
                    .size(typography::BODY)
                    .color(scheme.text_secondary),
            );

        let centered = container(text)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        let mut hero = Stack::new();
        if let Some(field) = &self.icon_field {
            hero = hero.push(field.view(self.now, scheme.accent));
        }
        hero = hero.push(centered);

        self.section_frame(Section::Home, hero.into())
    }

    fn about_section(&self) -> Element<'_, Message> {
        let content = Column::new()
            .spacing(spacing::LG)
            .push(Text::new(self.i18n.tr("about-title")).size(typography::HEADING))
            .push(Text::new(self.i18n.tr("about-body")).size(typography::BODY))
            .push(self.counters.view(&self.i18n, self.now));

        self.section_frame(Section::About, content.into())
    }

    fn card_section(
        &self,
        section: Section,
        title_key: &str,
        cards: &[(&'static str, &'static str)],
        reveals: &[RevealId],
    ) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
        for ((title, body), id) in cards.iter().zip(reveals) {
            row = row.push(self.reveal_card(*id, title, body));
        }

        let content = Column::new()
            .spacing(spacing::LG)
            .push(Text::new(self.i18n.tr(title_key)).size(typography::HEADING))
            .push(row);

        self.section_frame(section, content.into())
    }

    fn experience_section(&self) -> Element<'_, Message> {
        let mut timeline = Column::new().spacing(spacing::LG).width(Length::Fill);
        for ((role, body), id) in EXPERIENCE_CARDS.iter().zip(&self.experience_reveals) {
            timeline = timeline.push(self.reveal_card(*id, role, body));
        }

        let content = Column::new()
            .spacing(spacing::LG)
            .push(Text::new(self.i18n.tr("experience-title")).size(typography::HEADING))
            .push(timeline);

        self.section_frame(Section::Experience, content.into())
    }

    fn contact_section(&self) -> Element<'_, Message> {
        let content = Column::new()
            .spacing(spacing::LG)
            .max_width(640.0)
            .push(Text::new(self.i18n.tr("contact-title")).size(typography::HEADING))
            .push(self.contact.view(&self.i18n).map(Message::ContactForm));

        self.section_frame(Section::Contact, content.into())
    }

    /// A card that occupies its slot invisibly until its reveal fires.
    fn reveal_card(
        &self,
        id: RevealId,
        title_key: &'static str,
        body_key: &'static str,
    ) -> Element<'_, Message> {
        if !self.reveals.is_revealed(id) {
            return container(Space::new().width(Length::Fill).height(Length::Fixed(CARD_HEIGHT)))
                .width(Length::FillPortion(1))
                .into();
        }

        let content = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(self.i18n.tr(title_key)).size(typography::LEAD))
            .push(Text::new(self.i18n.tr(body_key)).size(typography::BODY));

        container(content)
            .width(Length::FillPortion(1))
            .height(Length::Fixed(CARD_HEIGHT))
            .padding(spacing::MD)
            .style(styles::card)
            .into()
    }
}
