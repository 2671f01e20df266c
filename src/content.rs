pub const OWNER_NAME: (&str, &str) = ("Mohamed", "Khalidh");
pub const OWNER_INITIALS: &str = "MK";
pub const ROLE: &str = "Frontend Developer";
pub const RESUME_HREF: &str = "/resume/Mohamed_Khalidh_Resume.pdf";
pub const RESUME_FILE_NAME: &str = "Mohamed_Khalidh_Resume.pdf";
pub const PORTRAIT_SRC: &str = "/images/image.png";

pub const NAV_SECTIONS: [(&str, &str); 7] = [
    ("About", "about"),
    ("Skills", "skills"),
    ("Projects", "projects"),
    ("Experience", "experience"),
    ("Education", "education"),
    ("Achievements", "achievements"),
    ("Contact", "contact"),
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

impl SocialLink {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const HERO_SOCIALS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/MohamedKhalidh-M",
        icon: "GH",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/mohamedkhalidh/",
        icon: "in",
    },
    SocialLink {
        label: "Email",
        href: "mailto:mdkhalidh2004@gmail.com",
        icon: "@",
    },
];

pub struct FloatingChip {
    pub label: &'static str,
    pub class: &'static str,
    pub delay_s: f64,
}

pub const HERO_CHIPS: [FloatingChip; 3] = [
    FloatingChip {
        label: "React",
        class: "chip chip-top-right",
        delay_s: 0.0,
    },
    FloatingChip {
        label: "JavaScript",
        class: "chip chip-bottom-left",
        delay_s: 1.0,
    },
    FloatingChip {
        label: "IoT",
        class: "chip chip-mid-right",
        delay_s: 0.5,
    },
];

/// Decorative hero shapes and how strongly each follows the pointer.
pub const HERO_SHAPES: [(&str, f64, f64); 3] = [
    ("shape shape-square", 1.0, 0.0),
    ("shape shape-circle", -1.0, 1.0),
    ("shape shape-tile", 0.5, 2.0),
];

pub const ABOUT: &str = "I am a Frontend Developer specializing in building interactive, responsive, \
and visually engaging web applications. With a strong background in Electronics and Communication \
Engineering, I blend software and hardware knowledge to create innovative, real-world solutions. \
I enjoy solving problems through clean UI design and efficient code.";

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
    pub accent: &'static str,
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Frontend Development",
        skills: &[
            "HTML5",
            "CSS3",
            "JavaScript (ES6+)",
            "React",
            "Tailwind CSS",
            "Responsive Design",
            "REST API Integration",
        ],
        accent: "accent-blue",
    },
    SkillCategory {
        title: "Programming & Backend",
        skills: &["Python", "Node.js (Basic)", "Flask", "SQL"],
        accent: "accent-purple",
    },
    SkillCategory {
        title: "Electronics & Embedded",
        skills: &["Arduino", "Embedded C", "IoT", "Sensors & Automation"],
        accent: "accent-pink",
    },
];

pub const TOOLS: [&str; 3] = ["Git & GitHub", "VS Code", "Google Cloud Platform"];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
    pub accent: &'static str,
}

pub const FRONTEND_PROJECTS: [Project; 2] = [
    Project {
        title: "Tic-Tac-Toe Web Game",
        description: "Interactive web-based Tic-Tac-Toe game featuring Player vs Player and Player vs AI modes. \
Includes Easy, Medium, and Hard (Minimax) difficulty levels with modern UI animations and keyboard controls.",
        tech: &["HTML", "CSS", "JavaScript"],
        link: Some("https://github.com/MohamedKhalidh-M"),
        accent: "accent-blue",
    },
    Project {
        title: "User Registration Web App",
        description: "Responsive user registration form with client-side validation and REST API integration. \
Displays real-time success and error feedback without page reload.",
        tech: &["HTML", "CSS", "JavaScript", "Fetch API"],
        link: Some("https://github.com/MohamedKhalidh-M"),
        accent: "accent-purple",
    },
];

pub const HARDWARE_PROJECTS: [Project; 4] = [
    Project {
        title: "Smart Attendance System",
        description: "Face recognition-based attendance system using computer vision to automate student \
attendance and reduce proxy attendance.",
        tech: &["Python", "OpenCV", "Face Recognition"],
        link: None,
        accent: "accent-green",
    },
    Project {
        title: "AI Chat Bot",
        description: "Flask-based AI chatbot using NLP techniques to dynamically answer user queries and FAQs.",
        tech: &["Python", "Flask", "NLP"],
        link: None,
        accent: "accent-violet",
    },
    Project {
        title: "Rash Driving Alert System",
        description: "Embedded system prototype designed to detect jerky movements and alert drivers to \
prevent accidents.",
        tech: &["Arduino", "Embedded C", "Sensors"],
        link: None,
        accent: "accent-orange",
    },
    Project {
        title: "DTMF-Based Control Device",
        description: "Hardware system that controls electronic devices remotely using DTMF signals via \
mobile phone without internet dependency.",
        tech: &["Arduino", "Communication Systems"],
        link: None,
        accent: "accent-cyan",
    },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub points: &'static [&'static str],
}

pub const EXPERIENCE: [Experience; 3] = [
    Experience {
        title: "Part-Time Site Manager",
        company: "Express Logistics",
        points: &[
            "Managed operations using digital tracking tools",
            "Coordinated 10+ staff members during peak hours",
            "Improved on-time delivery rate to 98%",
        ],
    },
    Experience {
        title: "Intern + Student Ambassador",
        company: "Advanced Python (KnowledgeXchange)",
        points: &[
            "Trained in Python, APIs, and scripting",
            "Promoted technical programs and enrolled 50+ students",
        ],
    },
    Experience {
        title: "Hackathon Coordinator",
        company: "Techevo Hackathon",
        points: &["Organized 100+ participants", "Coordinated logistics and technical execution"],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub field: &'static str,
    pub grade: &'static str,
    pub years: &'static str,
    pub school: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Engineering",
    field: "Electronics and Communication Engineering",
    grade: "CGPA: 8.5 / 10.0",
    years: "2021 - 2025",
    school: "Aalim Muhammed Salegh College of Engineering",
};

pub const ACHIEVEMENTS: [(&str, &str); 4] = [
    (
        "Conference Participation",
        "Attended IEEE CONECCT 2024 focusing on Emerging Technologies",
    ),
    (
        "Workshop Participation",
        "Completed workshop on Data Science & Machine Learning by NPTEL SWAYAM",
    ),
    (
        "Event Volunteer",
        "Coordinated and executed Techevo Hackathon with 100+ participants",
    ),
    (
        "Problem Solver",
        "Built 6+ real-world projects combining frontend and electronics expertise",
    ),
];

pub struct ContactLine {
    pub icon: &'static str,
    pub text: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_LINES: [ContactLine; 3] = [
    ContactLine {
        icon: "✉",
        text: "mdkhalidh2004@gmail.com",
        href: Some("mailto:mdkhalidh2004@gmail.com"),
    },
    ContactLine {
        icon: "☎",
        text: "+91 8220670648",
        href: Some("tel:+918220670648"),
    },
    ContactLine {
        icon: "⌖",
        text: "Levengipuram, Tamil Nadu, India",
        href: None,
    },
];

pub const FOOTER_YEAR: &str = "2025";
