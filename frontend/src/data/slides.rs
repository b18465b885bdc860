#[derive(Debug, PartialEq)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SLIDES: &[Slide] = &[
    Slide {
        image: "/carousel/slide1.png",
        title: "Food Donations",
        description: "Help feed families in need by donating groceries, cooked meals, or organizing food drives in your community.",
    },
    Slide {
        image: "/carousel/slide2.png",
        title: "Clothes & Essentials",
        description: "Donate clothes, blankets, and personal items to those who need them most. Every contribution matters.",
    },
    Slide {
        image: "/carousel/slide3.png",
        title: "Connect with Local NGOs",
        description: "Visit and partner with verified NGOs in your area. See their work firsthand and find ways to contribute.",
    },
    Slide {
        image: "/carousel/slide4.png",
        title: "Volunteer Your Time",
        description: "Join hands with communities: serve meals, teach children, assist the elderly, or support events.",
    },
    Slide {
        image: "/carousel/slide5.png",
        title: "Platform for NGOs",
        description: "Empowering NGOs with tools to manage volunteers, track impact, and reach more supporters efficiently.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_slides_with_numbered_images() {
        assert_eq!(SLIDES.len(), 5);
        for (i, slide) in SLIDES.iter().enumerate() {
            assert_eq!(slide.image, format!("/carousel/slide{}.png", i + 1));
        }
    }
}
