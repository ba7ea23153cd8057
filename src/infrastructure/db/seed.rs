use crate::{
    entities::{
        experience::{ExperienceType, NewExperience},
        project::{NewProject, ProjectCategory},
    },
    errors::AppError,
    repositories::{experience::ExperienceRepository, project::ProjectRepository},
    use_cases::{experience::ExperienceHandler, project::ProjectHandler},
};

const IMAGE_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&h=600";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub projects: usize,
    pub experiences: usize,
}

/// Loads the demo projects and timeline through the regular create paths, so
/// seeded records get the same validation, ids and timestamps as new ones.
pub async fn seed_demo_data<P, E>(
    projects: &ProjectHandler<P>,
    experiences: &ExperienceHandler<E>,
) -> Result<SeedSummary, AppError>
where
    P: ProjectRepository,
    E: ExperienceRepository,
{
    let mut summary = SeedSummary { projects: 0, experiences: 0 };

    for project in demo_projects() {
        projects.create_project(project).await?;
        summary.projects += 1;
    }

    for experience in demo_experiences() {
        experiences.create_experience(experience).await?;
        summary.experiences += 1;
    }

    tracing::info!(
        "Seeded {} demo projects and {} experience entries",
        summary.projects,
        summary.experiences
    );
    Ok(summary)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn unsplash(photo: &str) -> Option<String> {
    Some(format!("https://images.unsplash.com/{}{}", photo, IMAGE_PARAMS))
}

struct DemoProject {
    title: &'static str,
    description: &'static str,
    long_description: &'static str,
    category: ProjectCategory,
    technologies: &'static [&'static str],
    features: &'static [&'static str],
    tags: &'static [&'static str],
    repo: &'static str,
    demo_url: Option<&'static str>,
    photo: &'static str,
    featured: bool,
}

impl From<DemoProject> for NewProject {
    fn from(demo: DemoProject) -> Self {
        NewProject {
            title: demo.title.to_string(),
            description: demo.description.to_string(),
            long_description: Some(demo.long_description.to_string()),
            category: demo.category,
            technologies: strings(demo.technologies),
            features: Some(strings(demo.features)),
            tags: Some(strings(demo.tags)),
            github_url: Some(format!("https://github.com/alexjohnson/{}", demo.repo)),
            demo_url: demo.demo_url.map(str::to_string),
            image_url: unsplash(demo.photo),
            featured: demo.featured,
        }
    }
}

pub fn demo_projects() -> Vec<NewProject> {
    let projects = [
        DemoProject {
            title: "Job Application Assistant Agent",
            description: "AI-powered agent that automates job applications by analyzing job descriptions, customizing resumes, and generating personalized cover letters.",
            long_description: "An intelligent AI agent that revolutionizes the job application process by automating resume customization, cover letter generation, and application tracking. The system analyzes job descriptions using NLP techniques and matches candidate skills with requirements to create tailored applications.",
            category: ProjectCategory::Ai,
            technologies: &["Python", "LangChain", "OpenAI GPT", "FastAPI", "SQLAlchemy"],
            features: &[
                "Automated resume customization based on job requirements",
                "AI-powered cover letter generation with company research",
                "Application tracking and follow-up scheduling",
                "Skills gap analysis and recommendations",
            ],
            tags: &["AI Agent", "Python", "LangChain"],
            repo: "job-assistant",
            demo_url: Some("https://job-assistant-demo.com"),
            photo: "photo-1551434678-e076c223a692",
            featured: true,
        },
        DemoProject {
            title: "Super Knowledge Agent",
            description: "Advanced RAG system connecting 5000+ data sources with intelligent retrieval, semantic search, and context-aware responses.",
            long_description: "A comprehensive RAG (Retrieval-Augmented Generation) system that connects to over 5000 data sources, providing intelligent information retrieval with semantic search capabilities and context-aware responses for enterprise knowledge management.",
            category: ProjectCategory::Ai,
            technologies: &["Python", "Vector Database", "Semantic Search", "RAG", "LangChain"],
            features: &[
                "5000+ data source connectivity",
                "Advanced semantic search capabilities",
                "Context-aware response generation",
                "Enterprise-grade knowledge management",
            ],
            tags: &["RAG System", "Vector DB"],
            repo: "super-knowledge",
            demo_url: Some("https://knowledge-agent-demo.com"),
            photo: "photo-1677442136019-21780ecad995",
            featured: true,
        },
        DemoProject {
            title: "Code-to-Documentation Agent",
            description: "Automated documentation generator that analyzes codebases and creates comprehensive technical documentation with examples and diagrams.",
            long_description: "An intelligent documentation generation system that automatically analyzes code repositories and creates comprehensive technical documentation, including API references, code examples, and architectural diagrams.",
            category: ProjectCategory::Ai,
            technologies: &["Python", "AST Analysis", "OpenAI", "Documentation Generation"],
            features: &[
                "Automated codebase analysis",
                "Comprehensive documentation generation",
                "API reference creation",
                "Architectural diagram generation",
            ],
            tags: &["Code Analysis", "Auto-Gen"],
            repo: "doc-agent",
            demo_url: None,
            photo: "photo-1516321318423-f06f85e504b3",
            featured: true,
        },
        DemoProject {
            title: "SQL Query Assistant",
            description: "Open-source natural language to SQL converter using OSS Granite models, making database queries accessible to non-technical users.",
            long_description: "A natural language to SQL conversion system built with open-source Granite models, enabling non-technical users to query databases using plain English while maintaining data security and accuracy.",
            category: ProjectCategory::Ai,
            technologies: &["Python", "Granite Models", "NL2SQL", "Database Integration"],
            features: &[
                "Natural language to SQL conversion",
                "Support for multiple database types",
                "Query optimization suggestions",
                "Non-technical user friendly interface",
            ],
            tags: &["NL2SQL", "OSS"],
            repo: "sql-assistant",
            demo_url: Some("https://sql-assistant-demo.com"),
            photo: "photo-1544383835-bda2bc66a55d",
            featured: true,
        },
        DemoProject {
            title: "Dialysis Diet Planner",
            description: "AI-powered health application that creates personalized meal plans for dialysis patients, considering dietary restrictions and nutritional requirements.",
            long_description: "A specialized healthcare AI application that generates personalized meal plans for dialysis patients, taking into account specific dietary restrictions, nutritional requirements, and medical conditions to improve patient outcomes.",
            category: ProjectCategory::Ai,
            technologies: &["React", "Python", "Healthcare AI", "Nutrition Database"],
            features: &[
                "Personalized meal plan generation",
                "Dietary restriction compliance",
                "Nutritional requirement tracking",
                "Medical condition considerations",
            ],
            tags: &["HealthTech", "AI"],
            repo: "dialysis-planner",
            demo_url: Some("https://dialysis-planner-demo.com"),
            photo: "photo-1559757148-5c350d0d3c56",
            featured: true,
        },
        DemoProject {
            title: "Modern E-commerce Platform",
            description: "Full-featured e-commerce solution with React frontend, Node.js backend, payment integration, and advanced admin dashboard.",
            long_description: "A complete e-commerce platform featuring modern React frontend, robust Node.js backend, secure payment processing, inventory management, and comprehensive admin dashboard for business management.",
            category: ProjectCategory::Web,
            technologies: &["React", "Node.js", "PostgreSQL", "Stripe", "Redis"],
            features: &[
                "Complete e-commerce functionality",
                "Secure payment processing",
                "Inventory management system",
                "Advanced admin dashboard",
            ],
            tags: &["E-commerce", "Full Stack"],
            repo: "ecommerce-platform",
            demo_url: Some("https://ecommerce-demo.com"),
            photo: "photo-1556742049-0cfed4f6a45d",
            featured: false,
        },
        DemoProject {
            title: "Task Management System",
            description: "Collaborative task management platform with real-time updates, team collaboration features, and advanced project tracking.",
            long_description: "A comprehensive project and task management platform designed for teams, featuring real-time collaboration, advanced project tracking, time management, and productivity analytics.",
            category: ProjectCategory::Web,
            technologies: &["React", "Socket.io", "Express", "MongoDB", "WebRTC"],
            features: &[
                "Real-time collaboration",
                "Advanced project tracking",
                "Team management tools",
                "Productivity analytics",
            ],
            tags: &["Productivity", "Real-time"],
            repo: "task-manager",
            demo_url: Some("https://task-manager-demo.com"),
            photo: "photo-1611224923853-80b023f02d71",
            featured: false,
        },
        DemoProject {
            title: "Data Analytics Dashboard",
            description: "Interactive dashboard for data visualization with advanced filtering, real-time metrics, and customizable reporting features.",
            long_description: "A powerful data analytics and visualization platform that provides interactive dashboards, real-time metrics tracking, advanced filtering capabilities, and customizable reporting for business intelligence.",
            category: ProjectCategory::Web,
            technologies: &["React", "D3.js", "Python", "FastAPI", "ClickHouse"],
            features: &[
                "Interactive data visualization",
                "Real-time metrics tracking",
                "Advanced filtering system",
                "Customizable reporting",
            ],
            tags: &["Analytics", "Data Viz"],
            repo: "analytics-dashboard",
            demo_url: Some("https://analytics-demo.com"),
            photo: "photo-1551288049-bebda4e38f71",
            featured: false,
        },
    ];

    projects.into_iter().map(NewProject::from).collect()
}

pub fn demo_experiences() -> Vec<NewExperience> {
    vec![
        NewExperience {
            title: "Senior AI Engineer".to_string(),
            company: "TechCorp Solutions".to_string(),
            location: Some("San Francisco, CA".to_string()),
            start_date: "2022".to_string(),
            end_date: None,
            description: strings(&[
                "Led development of 5 AI-powered applications serving 10,000+ users",
                "Implemented RAG systems and intelligent agents using LangChain and OpenAI",
                "Mentored junior developers and established AI development best practices",
            ]),
            technologies: Some(strings(&["Python", "LangChain", "React", "AWS"])),
            kind: ExperienceType::Work,
        },
        NewExperience {
            title: "Full Stack Developer".to_string(),
            company: "InnovateLabs".to_string(),
            location: Some("San Francisco, CA".to_string()),
            start_date: "2020".to_string(),
            end_date: Some("2022".to_string()),
            description: strings(&[
                "Developed and maintained 15+ web applications using React and Node.js",
                "Designed and implemented RESTful APIs serving millions of requests daily",
                "Optimized application performance resulting in 40% faster load times",
            ]),
            technologies: Some(strings(&["React", "Node.js", "PostgreSQL", "Docker"])),
            kind: ExperienceType::Work,
        },
        NewExperience {
            title: "Software Developer".to_string(),
            company: "StartupXYZ".to_string(),
            location: Some("San Francisco, CA".to_string()),
            start_date: "2019".to_string(),
            end_date: Some("2020".to_string()),
            description: strings(&[
                "Built core features for SaaS platform used by 1000+ businesses",
                "Collaborated with design team to implement pixel-perfect UIs",
                "Participated in agile development process and code reviews",
            ]),
            technologies: Some(strings(&["Java", "Spring Boot", "JavaScript", "MySQL"])),
            kind: ExperienceType::Work,
        },
        NewExperience {
            title: "Master of Science in Computer Science".to_string(),
            company: "University of Technology".to_string(),
            location: Some("California".to_string()),
            start_date: "2017".to_string(),
            end_date: Some("2019".to_string()),
            description: strings(&[
                "Specialized in Machine Learning and Artificial Intelligence",
                "Thesis: \"Natural Language Processing for Code Documentation Generation\"",
                "GPA: 3.8/4.0, Dean's List recognition",
            ]),
            technologies: Some(Vec::new()),
            kind: ExperienceType::Education,
        },
    ]
}
