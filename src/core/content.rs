//! Static content registry
//!
//! Everything the marketing pages display: navigation, section copy, team,
//! projects, services, tech stack and contact details. Pure data, rendered
//! by the components in `crate::ui`.

use crate::core::application::Track;

/// Organization name shown in the header, footer and page titles
pub const ORGANIZATION: &str = "Team MOVIS";

/// Short brand used by the logo
pub const BRAND: &str = "MOVIS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// In-page anchors on the landing page (`/#section`)
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with("/#") || self.href.starts_with('#')
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "/#home" },
    NavLink { name: "About", href: "/#about" },
    NavLink { name: "Services", href: "/services" },
    NavLink { name: "Projects", href: "/#projects" },
    NavLink { name: "Team", href: "/#team" },
    NavLink { name: "Contact", href: "/#contact" },
];

/// Route of the application page
pub const JOIN_US_PATH: &str = "/join-us";

/// Route of the services detail page
pub const SERVICES_PATH: &str = "/services";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "15+", label: "Missions Completed" },
    Stat { value: "98%", label: "Success Rate" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_FEATURES: &[Feature] = &[
    Feature {
        icon: "target",
        title: "Mission Driven",
        description: "We strive to design, build, and launch cutting-edge aerospace solutions that push the boundaries of exploration.",
    },
    Feature {
        icon: "lightbulb",
        title: "AI-Powered Innovation",
        description: "Our team specializes in developing AI-driven solutions, integrating cutting-edge tools to create impactful applications.",
    },
    Feature {
        icon: "users",
        title: "Collaborative Spirit",
        description: "We believe in continuous learning, collaboration, and transforming ideas into reality through teamwork.",
    },
    Feature {
        icon: "award",
        title: "Excellence in Engineering",
        description: "Through competitions and real-world challenges, we hone our technical abilities and develop strong leadership skills.",
    },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "5+", label: "Years Experience" },
    Stat { value: "20+", label: "Team Members" },
    Stat { value: "15+", label: "Projects" },
];

/// Service card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "cog",
        title: "Rover Design",
        description: "Custom rover chassis and mechanical systems designed for extreme environments.",
        features: &["3D CAD Modeling", "Structural Analysis", "Material Selection"],
    },
    Service {
        icon: "cpu",
        title: "AI Integration",
        description: "Advanced AI and machine learning systems for autonomous navigation and decision-making.",
        features: &["Computer Vision", "Path Planning", "Obstacle Detection"],
    },
    Service {
        icon: "radio",
        title: "Communication Systems",
        description: "Robust telemetry and communication solutions for remote operation.",
        features: &["RF Systems", "Data Transmission", "Remote Control"],
    },
    Service {
        icon: "wrench",
        title: "Mechanical Engineering",
        description: "Precision-engineered components built to withstand harsh conditions.",
        features: &["Drivetrain Design", "Suspension Systems", "Actuator Integration"],
    },
    Service {
        icon: "test-tube",
        title: "Testing & Validation",
        description: "Comprehensive testing protocols ensuring mission-ready performance.",
        features: &["Environmental Testing", "Performance Analysis", "Quality Assurance"],
    },
    Service {
        icon: "database",
        title: "Data Systems",
        description: "Efficient data collection, storage, and analysis pipelines.",
        features: &["Sensor Integration", "Data Processing", "Real-time Analytics"],
    },
];

/// Longer service description on the services page
pub const SERVICE_DETAILS: &[Service] = &[
    Service {
        icon: "cpu",
        title: "Rover Design & Development",
        description: "Complete end-to-end rover system design from concept to deployment. Our engineering team specializes in creating autonomous vehicles for extreme environments.",
        features: &[
            "Custom chassis and suspension design",
            "Modular component architecture",
            "Environmental adaptation systems",
            "Power management optimization",
            "Thermal control systems",
        ],
    },
    Service {
        icon: "wrench",
        title: "Mechanical Engineering",
        description: "Advanced mechanical systems engineering for robust performance in challenging terrains and conditions.",
        features: &[
            "Structural analysis and optimization",
            "Mobility system design",
            "Deployment mechanism engineering",
            "Material selection and testing",
            "Manufacturing support",
        ],
    },
    Service {
        icon: "cog",
        title: "Software & Autonomy",
        description: "Cutting-edge software solutions for autonomous navigation, decision-making, and remote operation.",
        features: &[
            "Autonomous navigation algorithms",
            "Computer vision systems",
            "Real-time operating systems",
            "Path planning optimization",
            "Machine learning integration",
        ],
    },
    Service {
        icon: "radio",
        title: "Communication Systems",
        description: "Reliable communication architectures for maintaining connectivity in the most remote locations.",
        features: &[
            "RF system design",
            "Antenna optimization",
            "Data compression protocols",
            "Redundancy planning",
            "Ground station integration",
        ],
    },
    Service {
        icon: "flask",
        title: "Testing & Validation",
        description: "Comprehensive testing protocols to ensure mission success in the harshest conditions.",
        features: &[
            "Environmental testing",
            "Endurance simulations",
            "Fault injection testing",
            "Performance benchmarking",
            "Field trials coordination",
        ],
    },
    Service {
        icon: "graduation-cap",
        title: "Training & Consultation",
        description: "Expert guidance and knowledge transfer for teams building their own rover capabilities.",
        features: &[
            "Technical workshops",
            "Design reviews",
            "Best practices training",
            "Competition preparation",
            "Ongoing mentorship",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// (label, value) pairs
    pub stats: &'static [(&'static str, &'static str)],
    /// Theme key used by the stylesheet for the card gradient and accent
    pub theme: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Mars Exploration Rover",
        category: "Autonomous Systems",
        description: "Advanced autonomous rover designed for Mars terrain navigation with AI-powered obstacle avoidance and sample collection capabilities.",
        technologies: &["ROS2", "Python", "TensorFlow", "LiDAR"],
        stats: &[("range", "50km"), ("battery", "72hrs"), ("speed", "2m/s")],
        theme: "orange",
    },
    Project {
        id: 2,
        title: "Lunar Mining Bot",
        category: "Resource Extraction",
        description: "Specialized rover for lunar regolith analysis and mineral extraction, featuring advanced drilling and sample processing systems.",
        technologies: &["C++", "CUDA", "OpenCV", "Sensor Fusion"],
        stats: &[("depth", "2m"), ("capacity", "50kg"), ("precision", "0.1mm")],
        theme: "cyan",
    },
    Project {
        id: 3,
        title: "Search & Rescue Drone",
        category: "Emergency Response",
        description: "Multi-terrain rescue rover with thermal imaging, GPS tracking, and emergency supply delivery capabilities.",
        technologies: &["Rust", "Embedded Systems", "ML", "LoRa"],
        stats: &[("search", "10km²"), ("response", "15min"), ("payload", "20kg")],
        theme: "emerald",
    },
    Project {
        id: 4,
        title: "Agricultural Monitor",
        category: "Smart Farming",
        description: "Precision agriculture rover for crop monitoring, soil analysis, and automated farming operations.",
        technologies: &["IoT", "AWS", "Computer Vision", "Zigbee"],
        stats: &[("coverage", "100ha"), ("accuracy", "98%"), ("efficiency", "+40%")],
        theme: "violet",
    },
];

/// Proficiency bar in the tech section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub category: &'static str,
    /// Percentage, 0..=100
    pub level: u8,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "Python", category: "Programming", level: 95 },
    Technology { name: "ROS2", category: "Robotics", level: 90 },
    Technology { name: "TensorFlow", category: "AI/ML", level: 88 },
    Technology { name: "C++", category: "Programming", level: 85 },
    Technology { name: "CUDA", category: "GPU Computing", level: 82 },
    Technology { name: "OpenCV", category: "Computer Vision", level: 90 },
    Technology { name: "SolidWorks", category: "CAD", level: 88 },
    Technology { name: "Arduino", category: "Embedded", level: 92 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechCategory {
    pub category: &'static str,
    pub items: &'static [&'static str],
    pub color: &'static str,
}

pub const TECH_STACK: &[TechCategory] = &[
    TechCategory {
        category: "AI & Machine Learning",
        items: &["TensorFlow", "PyTorch", "OpenCV", "YOLO", "ROS2"],
        color: "primary",
    },
    TechCategory {
        category: "Embedded Systems",
        items: &["Arduino", "Raspberry Pi", "ESP32", "STM32", "FPGA"],
        color: "secondary",
    },
    TechCategory {
        category: "Mechanical Design",
        items: &["SolidWorks", "AutoCAD", "Fusion 360", "3D Printing", "CNC"],
        color: "accent",
    },
    TechCategory {
        category: "Communication",
        items: &["LoRa", "Zigbee", "WiFi", "Bluetooth", "RF Systems"],
        color: "primary",
    },
];

pub const TECH_COUNTERS: &[Stat] = &[
    Stat { value: "50+", label: "Technologies Used" },
    Stat { value: "1000+", label: "Lines of Code" },
    Stat { value: "100%", label: "Team Dedication" },
    Stat { value: "24/7", label: "Innovation Mindset" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub department: Track,
    pub quote: &'static str,
}

impl TeamMember {
    /// Avatar initials: first letter of each word of the name
    pub fn initials(&self) -> String {
        initials(self.name)
    }
}

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Kautilya Sai Nath",
        role: "Mechanical Lead",
        department: Track::Mechanical,
        quote: "Being a part of Team MOVIS allowed me to connect with like-minded, passionate makers and engineers.",
    },
    TeamMember {
        name: "Ojas Dhar",
        role: "Electronics Lead",
        department: Track::Electrical,
        quote: "Engineering, creating, innovating and tinkering with things brings me unsurpassed joy.",
    },
    TeamMember {
        name: "Lathika G S",
        role: "Programming Lead",
        department: Track::Programming,
        quote: "We thrive on innovation, pushing the boundaries of technology through hackathons.",
    },
    TeamMember {
        name: "Vivek",
        role: "Software Engineer",
        department: Track::Programming,
        quote: "Eat. Sleep. Train. Deploy. Innovate. Repeat.",
    },
    TeamMember {
        name: "Vanshita Gupta S",
        role: "ML Engineer",
        department: Track::Programming,
        quote: "We aim to bridge the gap between technology and real-world impact.",
    },
    TeamMember {
        name: "Dishita",
        role: "Electrical Engineer",
        department: Track::Electrical,
        quote: "Space is not just a destination, it's a challenge that brings out the best in human ingenuity.",
    },
];

/// Team members in `department`, or everyone for `None`
pub fn team_members(department: Option<Track>) -> Vec<&'static TeamMember> {
    TEAM_MEMBERS
        .iter()
        .filter(|member| department.is_none_or(|d| member.department == d))
        .collect()
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static str,
    pub subtext: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "map-pin",
        title: "Location",
        details: "Innovation Hub, Tech Campus",
        subtext: "Open for visits by appointment",
    },
    ContactInfo {
        icon: "mail",
        title: "Email",
        details: "contact@teammovis.com",
        subtext: "We respond within 24 hours",
    },
    ContactInfo {
        icon: "phone",
        title: "Phone",
        details: "+1 (555) 123-4567",
        subtext: "Mon-Fri, 9am-6pm",
    },
    ContactInfo {
        icon: "clock",
        title: "Working Hours",
        details: "9:00 AM - 6:00 PM",
        subtext: "Monday to Friday",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: "github", label: "GitHub", href: "#" },
    SocialLink { icon: "linkedin", label: "LinkedIn", href: "#" },
    SocialLink { icon: "twitter", label: "Twitter", href: "#" },
    SocialLink { icon: "instagram", label: "Instagram", href: "#" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_GROUPS: &[FooterGroup] = &[
    FooterGroup {
        title: "Company",
        links: &[
            NavLink { name: "About", href: "/#about" },
            NavLink { name: "Team", href: "/#team" },
            NavLink { name: "Careers", href: JOIN_US_PATH },
            NavLink { name: "Contact", href: "/#contact" },
        ],
    },
    FooterGroup {
        title: "Services",
        links: &[
            NavLink { name: "Rover Design", href: SERVICES_PATH },
            NavLink { name: "AI Integration", href: SERVICES_PATH },
            NavLink { name: "Testing", href: SERVICES_PATH },
            NavLink { name: "Consulting", href: SERVICES_PATH },
        ],
    },
    FooterGroup {
        title: "Resources",
        links: &[
            NavLink { name: "Documentation", href: "#" },
            NavLink { name: "Blog", href: "#" },
            NavLink { name: "Case Studies", href: "/#projects" },
            NavLink { name: "FAQ", href: "#" },
        ],
    },
];

pub const JOIN_BENEFITS: &[Feature] = &[
    Feature {
        icon: "rocket",
        title: "Real Projects",
        description: "Work on actual rover missions",
    },
    Feature {
        icon: "users",
        title: "Expert Mentorship",
        description: "Learn from industry veterans",
    },
    Feature {
        icon: "zap",
        title: "Cutting-Edge Tech",
        description: "Access advanced equipment",
    },
];
