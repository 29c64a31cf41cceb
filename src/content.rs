//! Session content: the static pages around the two activities

use crate::catalog::ContentCatalog;
use serde::{Deserialize, Serialize};

/// Film citations shown on the movie references page, in display order
pub const MOVIE_REFERENCES: [&str; 9] = [
    "Avengers film series. (2012–2019). The Avengers; Avengers: Age of Ultron; Avengers: Infinity War; Avengers: Endgame [Film series]. Marvel Studios.",
    "The Dark Knight trilogy. (2005–2012). Batman Begins; The Dark Knight; The Dark Knight Rises [Film series]. Warner Bros.",
    "Infinite. (2021). Infinite [Film]. Paramount Pictures.",
    "Kingsman film series. (2014–2021). Kingsman: The Secret Service; Kingsman: The Golden Circle; The King's Man [Film series]. 20th Century Fox.",
    "Star Wars film series. (1977–2019). Star Wars: Episode IV—A New Hope; Episode V—The Empire Strikes Back; Episode VI—Return of the Jedi; Episode I—The Phantom Menace; Episode II—Attack of the Clones; Episode III—Revenge of the Sith; Episode VII—The Force Awakens; Episode VIII—The Last Jedi; Episode IX—The Rise of Skywalker [Film series]. Lucasfilm.",
    "The Matrix. (1999). The Matrix [Film]. Warner Bros.",
    "Three Kings. (1999). Three Kings [Film]. Warner Bros.",
    "Transformers: The Last Knight. (2017). Transformers: The last knight [Film]. Paramount Pictures.",
    "War Dogs. (2016). War dogs [Film]. Warner Bros.",
];

pub const AVENGERS: usize = 0;
pub const DARK_KNIGHT: usize = 1;
pub const KINGSMAN: usize = 3;
pub const STAR_WARS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Takeaway {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadershipWordActivity {
    pub title: String,
    pub goal: String,
    pub prompt: String,
    pub examples: Vec<String>,
    pub reflection_prompts: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusSolutionsActivity {
    pub title: String,
    pub goal: String,
    pub common_challenges: Vec<String>,
    pub brainstorm_prompts: Vec<String>,
    pub micro_solution_examples: Vec<String>,
    pub description: String,
}

/// Everything the informational pages display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContent {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub organization: String,
    pub bio: String,
    pub abstract_short: String,
    pub abstract_full: String,
    pub learning_outcomes: Vec<String>,
    pub takeaways: Vec<Takeaway>,
    pub activity1: LeadershipWordActivity,
    pub activity2: CampusSolutionsActivity,
}

/// Pages the CLI and server can render
pub const PAGES: [&str; 8] = [
    "overview",
    "bio",
    "abstract",
    "outcomes",
    "takeaways",
    "activities",
    "references",
    "movies",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn session_content() -> SessionContent {
    SessionContent {
        title: "Institution Hero".to_string(),
        subtitle: "Heroes and Villains in Higher Education: Resilience and The Role of Next Generation Student Leaders".to_string(),
        author: "Michael Viernes".to_string(),
        organization: "Foundation for International Education".to_string(),
        bio: "Crossing borders and building bridges, Michael is a Ph.D. International Psychology student. By earning a B.A. in Psychology and M.A. in Forensic Psychology from The Chicago School, he strengthened his intellectual foundation and presented his work at American Psychological Association conferences. Study-abroad experiences in Berlin, Zurich, and Johannesburg continue to inspire him to expand his mentor's work in resilience, culture, and ethical leadership.".to_string(),
        abstract_short: "Academic institutions often reflect stories of \"Heroes\" and \"Villains\" in leadership, whether it be student or faculty, the stories reveal how integrity, compassion, and discouraging behaviors shape the climate of higher education. A psychological examination of these contrasting patterns shows that resilience functions as an interwoven process supporting both personal and institutional well-being. Drawing on research on wisdom and knowledge, we highlight how cognitive strengths, identity reconstruction, and social belonging contribute to academic resilience and help prevent dislocation during times of disruption. The session illustrates how ethical and wise leadership modeled through cinematic mentors such as Yoda and Morpheus creates environments where students regain purpose and coherence amid uncertainty. We then focus on next-generation student leaders, demonstrating how they can cultivate resilience as relational wisdom grounded in creativity, curiosity, judgment, and reflective practice. Practical strategies will be offered to help emerging and current leaders foster psychosocial inclusion and strengthen compassionate, ethically responsible cultures within higher education.".to_string(),
        abstract_full: "Every academic institution has its stories of Heroes and Villains in academic leadership that unfold quietly in classrooms, offices, and leadership meetings. The Hero and Villain narrative reveals how resilience, compassion, and integrity shape or sabotage the moral climate of higher education. Exploring the paradox of academic leadership through a psychological lens and building on the virtue of wisdom and knowledge, we will place resilience not merely as endurance but as an attuned process. A dynamic balance between cognitive strengths, identity reconstruction, and social belonging forms the foundation of strong academic resilience. In academic realms, wisdom manifests creative ethical leadership, helping to change psychosocial disruption into opportunities for thriving social capital, development, meaning making, and evolution. Psychosocial inclusion, resilience, and adaptive capacity are foundational elements of identity and mental health. When the fundamentals of leadership collapse, dislocation often comes next; fortunately, protective forces, including social support, mentorship, and moral reflection realign responsibilities, creating equilibrium and redefining the culture of responsibility (McGrath, Erickson, & Mayes, 2022). Much like cinematic mentors who exemplify wisdom, Yoda or Morpheus, heroic academic leaders must foster places where students rediscover purpose and coherence amid institutional uncertainty. Practical intelligence reflects the protective power of wisdom, integrating self, others, and community to rebuild cohesion where exclusion once fractured it. Next-generation student leaders must embody these virtues: cultivating resilience as relational wisdom, guided by creativity, curiosity, judgment, and love of learning, to reweave disrupted academic and psychosocial identities into stronger, more compassionate systems of belonging.".to_string(),
        learning_outcomes: strings(&[
            "Make a distinction between constructive (heroic) and destructive (villainous) leadership behaviors in higher education, applying ethical and psychological frameworks of resilience and moral integrity, e.g., psychosocial inclusion, identity coherence, and adaptive capacity, reducing dislocation during periods of disruption (McGrath et al., 2022).",
            "Elucidate how wisdom, compassion, and adaptive capacity transform psychosocial disruption into opportunities for belonging and growth.",
            "Demonstrate how next-generation student leaders can cultivate relational resilience and leadership identity through creative, reflective, and inclusive practice.",
        ]),
        takeaways: vec![
            Takeaway {
                title: "Leadership as Moral Narrative".to_string(),
                description: "Leadership functions as a moral narrative, in which leadership behaviors can be experienced as constructive or less constructive, shaping the ethical and emotional climate of academic institutions.".to_string(),
            },
            Takeaway {
                title: "Resilience is Developmental".to_string(),
                description: "Resilience is developmental, not static. Resilience combines wisdom, identity reconstruction, and belonging, transforming disruption into development and social cohesion (Erickson, 2017).".to_string(),
            },
            Takeaway {
                title: "Wisdom Through Reflection".to_string(),
                description: "Wisdom tends to deepen when individuals are encouraged to reflect on issues that hold personal meaning. Ethical creative leadership, rooted in curiosity, discernment, and love of learning, acts as a safeguard against moral erosion and dislocation (Niemiec & Wedding).".to_string(),
            },
            Takeaway {
                title: "Next-Generation Leadership is Relational".to_string(),
                description: "Emerging student leaders must cultivate resilience through mentorship, reflective practice, and moral responsibility to rebuild systems of belonging.".to_string(),
            },
            Takeaway {
                title: "Heroic Leadership is Teachable".to_string(),
                description: "Where self-awareness, empathy, and community engagement are balanced, leaders create the \"ordinary magic\" that converts adversity into ethical growth (Erickson, 2017).".to_string(),
            },
        ],
        activity1: LeadershipWordActivity {
            title: "Your Leadership Word".to_string(),
            goal: "Help students quickly identify leadership values and see how diverse strengths contribute to a positive academic culture.".to_string(),
            prompt: "What ONE word describes the kind of leader you admire?".to_string(),
            examples: strings(&[
                "honest", "brave", "creative", "patient", "resilient", "fair", "innovation",
                "compassion", "integrity", "low-key iconic", "low drama",
            ]),
            reflection_prompts: strings(&[
                "Why did you choose that word?",
                "Who in your life (teacher, coach, peer) reflects that word?",
                "How does that word show resilience?",
                "What is one small action YOU can take this week that matches your leadership word?",
            ]),
            description: "This reflective activity draws on leadership identity development and resilience frameworks, emphasizing values clarification, relational learning, and adaptive capacity (Jansen & Wieland, 2024; Masten, 2014; Northouse, 2022; Sunderman & Orsini, 2024; Waddington & Bonaparte, 2025; Killingback et al., 2025).".to_string(),
        },
        activity2: CampusSolutionsActivity {
            title: "Resilient Leadership for Campus Solutions".to_string(),
            goal: "Teach students how heroic leadership and resilience apply to real academic challenges.".to_string(),
            common_challenges: strings(&[
                "Group projects where no one communicates",
                "Professors who give unclear directions",
                "Campus offices that do not respond",
                "Clubs that lack organization",
                "Students feeling isolated",
            ]),
            brainstorm_prompts: strings(&[
                "What would the villain response to this problem look like?",
                "What would the heroic response look like?",
                "Which protective factor (support, mentorship, collaboration) helps solve it?",
            ]),
            micro_solution_examples: strings(&[
                "Create a group chat",
                "Ask for clarification respectfully",
                "Check in on an isolated peer",
                "Organize a 10-minute planning meeting",
            ]),
            description: "Activity 2 was designed to engage students in applying principles of resilience, ethical leadership, and systems thinking to common academic challenges. Drawing on resilience theory (Erickson, 2017; Masten, 2014), research on compassionate pedagogy (Killingback et al., 2025), and systems perspectives informed by chaos theory (Elliott & Kiel, 1996), the activity encourages students to identify protective factors and develop small, values-driven leadership actions that promote inclusion and stability.".to_string(),
        },
    }
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text rendering of one page, `None` for an unknown page name
pub fn render_page(name: &str, content: &SessionContent, catalog: &ContentCatalog) -> Option<String> {
    let text = match name {
        "overview" => format!(
            "{}\n{}\n\n{} ({})\n\n{}",
            content.title, content.subtitle, content.author, content.organization, content.abstract_short
        ),
        "bio" => format!("{}\n{}\n\n{}", content.author, content.organization, content.bio),
        "abstract" => content.abstract_full.clone(),
        "outcomes" => numbered(&content.learning_outcomes),
        "takeaways" => content
            .takeaways
            .iter()
            .map(|t| format!("{}\n  {}", t.title, t.description))
            .collect::<Vec<_>>()
            .join("\n\n"),
        "activities" => {
            let a1 = &content.activity1;
            let a2 = &content.activity2;
            format!(
                "{}\n{}\n\n{}\nExamples: {}\n{}\n\n{}\n{}\n\nCommon challenges:\n{}\n\nPrompts:\n{}\n\nMicro-solution ideas:\n{}",
                a1.title,
                a1.goal,
                a1.prompt,
                a1.examples.join(", "),
                numbered(&a1.reflection_prompts),
                a2.title,
                a2.goal,
                numbered(&a2.common_challenges),
                numbered(&a2.brainstorm_prompts),
                numbered(&a2.micro_solution_examples),
            )
        }
        "references" => catalog.ordered_reference_texts().join("\n\n"),
        "movies" => MOVIE_REFERENCES.join("\n\n"),
        _ => return None,
    };

    Some(text)
}
