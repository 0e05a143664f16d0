//! Static copy for the simulated events page.

use techevents_types::SectionId;

pub(crate) struct SectionCopy {
    pub id: SectionId,
    pub title: &'static str,
    pub lines: &'static [&'static str],
    /// Height in rows, including the card border.
    pub height: u16,
}

pub(crate) const SECTIONS: [SectionCopy; 3] = [
    SectionCopy {
        id: SectionId::Home,
        title: " Tech Events ",
        lines: &[
            "",
            "Find the meetups, conferences and hack nights worth your evening.",
            "",
            "Every listing is posted by the people running it, so dates, venues",
            "and speaker line-ups stay current.",
            "",
            "  ✦ Browse what is coming up in View Events",
            "  ✦ Publish your own gathering from Add Events",
            "  ✦ Sign in to keep track of the events you host",
            "",
            "Scroll with the wheel, arrow keys or PageUp/PageDown.",
        ],
        height: 20,
    },
    SectionCopy {
        id: SectionId::Event,
        title: " Upcoming Events ",
        lines: &[
            "",
            "Rust Systems Night        Thu 19:00   Hall B, Innovation Hub",
            "  Async runtimes from the inside, plus lightning talks.",
            "",
            "Cloud Native Meetup       Sat 10:00   Room 4, Tech Park",
            "  Operators, service meshes and a hands-on cluster lab.",
            "",
            "Frontend Friday           Fri 18:30   Online",
            "  Design systems that survive contact with production.",
            "",
            "Data Engineering Summit   Mon 09:00   Main Auditorium",
            "  Streaming pipelines, lakehouses and cost control.",
            "",
            "Security Capture The Flag Sun 12:00   Lab 2",
            "  Teams of four, twelve challenges, pizza included.",
            "",
            "Open Source Sprint        Wed 17:00   Co-working Loft",
            "  Bring a laptop and pick a good-first-issue.",
        ],
        height: 28,
    },
    SectionCopy {
        id: SectionId::EventForm,
        title: " Add an Event ",
        lines: &[
            "",
            "Title        ______________________________",
            "",
            "Date         ____ / __ / __     Time  __:__",
            "",
            "Venue        ______________________________",
            "",
            "Description  ______________________________",
            "             ______________________________",
            "",
            "Organiser    ______________________________",
            "",
            "             [ Publish Event ]",
        ],
        height: 22,
    },
];
