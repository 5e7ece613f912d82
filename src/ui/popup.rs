//! Popup card for a selected tree
//!
//! Both representations of an entry are bound to the same content, so
//! clicking either the dot or the icon produces the same card.

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, row, text};
use iced::{Element, Length};

use crate::state::entry::TreeEntry;
use crate::Message;

pub fn popup_card<'a>(entry: &'a TreeEntry, photo: Option<&Handle>) -> Element<'a, Message> {
    let mut card = column![].spacing(8);

    if let Some(handle) = photo {
        card = card.push(image(handle.clone()).width(Length::Fill));
    }

    let name: &str = if entry.popup.name.is_empty() {
        "Unknown tree"
    } else {
        &entry.popup.name
    };
    card = card.push(row![text("Name: ").size(14), text(name).size(14)]);

    if !entry.popup.botanical_name.is_empty() {
        card = card.push(row![
            text("Botanical Name: ").size(14),
            text(&entry.popup.botanical_name).size(14),
        ]);
    }

    if let Some(link) = &entry.popup.link {
        card = card.push(row![
            button(text("Tree Tales").size(13))
                .on_press(Message::CopyLink(link.clone()))
                .padding(6),
            text("(copies the link)").size(12),
        ]);
    }

    container(card).padding(10).width(Length::Fill).into()
}
