//! Static page content consumed by the controller and the DOM builder.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub image_ref: &'static str,
    pub repo_url: &'static str,
    pub live_url: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub type ContactLink = NavLink;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Project cards alternate: even positions put the image on the left.
    pub fn for_index(index: usize) -> Side {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

pub const OWNER_NAME: &str = "Rohan Kumar";
pub const PROFILE_IMAGE: &str = "/profile.jpg";
pub const CONTACT_EMAIL: &str = "yourmail@email.com";
pub const CONTACT_PHONE: &str = "+91 XXXXX XXXXX";

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Blockchain Document Verification",
        description: "Tamper-evident document registry anchored on-chain.",
        image_ref: "/blockchain.png",
        repo_url: "https://github.com/BlackMagic95/blockChain-Document-Verification",
        live_url: "https://block-chain-document-verification-phi.vercel.app",
        tags: &["Solidity", "React", "Node.js"],
    },
    ProjectRecord {
        title: "Netflix Clone",
        description: "Streaming catalogue front-end with auth and browsing rows.",
        image_ref: "/netflix.png",
        repo_url: "https://github.com/BlackMagic95/netflix-clone",
        live_url: "https://netflix-clone-frontend-ng5y.onrender.com",
        tags: &["React", "Firebase"],
    },
    ProjectRecord {
        title: "Credit Sea App",
        description: "Loan application and review dashboard.",
        image_ref: "/credit.png",
        repo_url: "https://github.com/BlackMagic95/Credit_Sea_App",
        live_url: "https://credit-sea-app-lime.vercel.app",
        tags: &["TypeScript", "Express", "MongoDB"],
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Work",
        href: "#work",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

/// Optional external resume link shown after the anchors.
pub const RESUME_LINK: Option<NavLink> = None;

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/yourprofile",
    },
    ContactLink {
        label: "LeetCode",
        href: "https://leetcode.com/yourprofile",
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/BlackMagic95",
    },
];

pub fn nav_links() -> impl Iterator<Item = NavLink> {
    NAV_LINKS.iter().copied().chain(RESUME_LINK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_alternate() {
        let sides: Vec<Side> = (0..4).map(Side::for_index).collect();
        assert_eq!(sides, [Side::Left, Side::Right, Side::Left, Side::Right]);
    }

    #[test]
    fn nav_anchors_are_in_page() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.label);
        }
        assert_eq!(nav_links().count(), NAV_LINKS.len() + RESUME_LINK.iter().count());
    }
}
