// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BoardTheme;

impl BoardTheme {
    pub(crate) fn section_title_style(self) -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn selection_style(self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn edit_border_style(self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub(crate) fn hint_style(self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub(crate) fn status_style(self) -> Style {
        Style::default().fg(Color::Red)
    }
}
