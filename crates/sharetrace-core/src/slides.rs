//! Narrative slides: one per layer the photo passes through

/// Static descriptor of a narrative panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// The fixed story order, from the app's UI down to the edge PoP
pub const SLIDES: &[Slide] = &[
    Slide {
        id: "application",
        title: "Application Layer",
        subtitle: "UI → app code → HTTP payload",
    },
    Slide {
        id: "transport",
        title: "Transport Layer",
        subtitle: "HTTP bytes → TCP segments",
    },
    Slide {
        id: "network-ethernet",
        title: "Network + Ethernet",
        subtitle: "IP packets → Ethernet frames",
    },
    Slide {
        id: "routing",
        title: "Routing",
        subtitle: "A destination path is selected",
    },
    Slide {
        id: "physical",
        title: "Physical Layer",
        subtitle: "Bits, photons, and physics",
    },
    Slide {
        id: "exit-lan",
        title: "Leaving the LAN",
        subtitle: "Switches, routers, BGP handoffs",
    },
    Slide {
        id: "internet",
        title: "Internet Backbone",
        subtitle: "Cross-ISP transit and peering",
    },
    Slide {
        id: "meta-edge",
        title: "Meta Edge",
        subtitle: "Edge PoP → storage → post is live",
    },
];

/// Number of slides in the story
pub fn slide_count() -> usize {
    SLIDES.len()
}

/// Look up a slide by index
pub fn slide(index: usize) -> Option<&'static Slide> {
    SLIDES.get(index)
}

// ─────────────────────────────────────────────────────────────────
// Static narrative copy
// ─────────────────────────────────────────────────────────────────

pub const STORY_KICKER: &str = "INSTAGRAM TO ELECTRONS";

pub const STORY_HEADLINE: &str =
    "Identity online feels personal, but it rides the largest machine humanity has ever built.";

pub const STORY_INTRO: &str = "As you share a photo, the signal crosses protocols, hardware, \
    and oceans. Each slide dives deeper into the stack.";

pub const APPLICATION_HEADLINE: &str = "UI to encrypted payload, all in user space.";

pub const APPLICATION_BODY: &str = "When you press Share, the app turns your image into bytes, \
    builds an HTTP request, and encrypts it with TLS. Every step happens inside the app process \
    before the OS ever sees a packet.";

pub const STEP_HEAP_TITLE: &str = "STEP 1 · APP HEAP";
pub const STEP_HEAP_BODY: &str = "The image is encoded to a string, then the request body is \
    serialized into a UTF-8 byte buffer.";

pub const STEP_HTTP_TITLE: &str = "STEP 2 · HTTP REQUEST";
pub const STEP_HTTP_BODY: &str =
    "The networking stack assembles headers and body bytes for an HTTPS POST.";

pub const STEP_TLS_TITLE: &str = "STEP 3 · TLS RECORDS";
pub const STEP_TLS_BODY: &str = "TLS encrypts the HTTP bytes into records. Plaintext becomes \
    encrypted payloads, still inside the app process.";

pub const UPCOMING_BODY: &str = "This slide is queued up next. We will visualize how the \
    payload is segmented, sequenced, and routed across the globe.";

pub const UPCOMING_PLACEHOLDER: &str = "Coming soon.";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_eight_slides_in_story_order() {
        assert_eq!(slide_count(), 8);
        assert_eq!(SLIDES[0].id, "application");
        assert_eq!(SLIDES[7].id, "meta-edge");
    }

    #[test]
    fn test_slide_ids_are_unique() {
        let ids: HashSet<_> = SLIDES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SLIDES.len());
    }

    #[test]
    fn test_slide_lookup_out_of_range() {
        assert!(slide(0).is_some());
        assert!(slide(slide_count()).is_none());
    }
}
