//! The built-in career catalog and its weight tables.
//!
//! Weights run 1 (weak signal) to 5 (defining signal). Options a career does not
//! list carry no weight for that career.

use crate::assessment::models::{
    CareerPath, QuestionId, QuestionWeights, Resource, TierWeights, WeightTable,
};

fn options(pairs: &[(&str, f64)]) -> QuestionWeights {
    QuestionWeights::Options(
        pairs
            .iter()
            .map(|(value, weight)| (value.to_string(), *weight))
            .collect(),
    )
}

fn tiers(low: f64, medium: f64, high: f64) -> QuestionWeights {
    QuestionWeights::Tiers(TierWeights {
        low: Some(low),
        medium: Some(medium),
        high: Some(high),
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resources(items: &[(&str, &str)]) -> Vec<Resource> {
    items
        .iter()
        .map(|(title, url)| Resource {
            title: title.to_string(),
            url: url.to_string(),
        })
        .collect()
}

struct Entry<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    icon: &'a str,
    weights: Vec<(QuestionId, QuestionWeights)>,
    skills: &'a [&'a str],
    jobs: &'a [&'a str],
    resources: &'a [(&'a str, &'a str)],
}

impl Entry<'_> {
    fn build(self) -> CareerPath {
        CareerPath {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            weights: self.weights.into_iter().collect::<WeightTable>(),
            suggested_skills: strings(self.skills),
            example_jobs: strings(self.jobs),
            resources: resources(self.resources),
        }
    }
}

pub fn builtin_careers() -> Vec<CareerPath> {
    use QuestionId::*;

    vec![
        Entry {
            id: "technology_engineering",
            title: "Technology & Engineering",
            description: "Design, build and run the software and systems that power modern organizations.",
            icon: "💻",
            weights: vec![
                (
                    ExperienceBackground,
                    options(&[
                        ("student", 3.0),
                        ("early_career", 3.0),
                        ("mid_career", 3.0),
                        ("senior", 3.0),
                        ("career_changer", 2.0),
                    ]),
                ),
                (
                    EducationLevel,
                    options(&[
                        ("high_school", 1.0),
                        ("some_college", 2.0),
                        ("bachelors", 3.0),
                        ("graduate", 3.0),
                    ]),
                ),
                (
                    SkillStrengths,
                    options(&[
                        ("technical", 5.0),
                        ("research", 2.0),
                        ("communication", 1.0),
                        ("creative", 1.0),
                        ("leadership", 1.0),
                    ]),
                ),
                (
                    FieldOfStudy,
                    options(&[
                        ("computer_science", 5.0),
                        ("engineering", 4.0),
                        ("science", 2.0),
                        ("business", 1.0),
                        ("other", 1.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("coding", 5.0),
                        ("problem_solving", 4.0),
                        ("data_analysis", 3.0),
                        ("research", 2.0),
                        ("collaboration", 1.0),
                        ("design", 1.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("building", 5.0),
                        ("optimizing", 4.0),
                        ("learning", 4.0),
                        ("analyzing", 3.0),
                    ]),
                ),
                (
                    ProblemType,
                    options(&[
                        ("technical", 5.0),
                        ("analytical", 3.0),
                        ("creative", 1.0),
                    ]),
                ),
                (
                    IndustryInterest,
                    options(&[
                        ("technology_engineering", 5.0),
                        ("science_research", 2.0),
                        ("manufacturing_construction", 1.0),
                    ]),
                ),
                (
                    WorkStyle,
                    options(&[
                        ("dynamic", 4.0),
                        ("independent", 3.0),
                        ("collaborative", 3.0),
                        ("structured", 2.0),
                    ]),
                ),
                (
                    CareerPriority,
                    options(&[
                        ("compensation", 4.0),
                        ("growth", 4.0),
                        ("balance", 2.0),
                        ("security", 2.0),
                    ]),
                ),
                (RiskTolerance, tiers(2.0, 3.0, 3.0)),
            ],
            skills: &[
                "Programming",
                "System design",
                "Cloud platforms",
                "Version control",
                "Debugging",
            ],
            jobs: &[
                "Software Engineer",
                "Data Engineer",
                "DevOps Engineer",
                "IT Support Specialist",
                "QA Engineer",
            ],
            resources: &[
                ("Developer Roadmaps", "https://roadmap.sh"),
                ("freeCodeCamp", "https://www.freecodecamp.org"),
            ],
        }
        .build(),
        Entry {
            id: "business_management",
            title: "Business, Management & Strategy",
            description: "Lead teams, shape strategy and keep organizations running efficiently.",
            icon: "📊",
            weights: vec![
                (
                    ExperienceBackground,
                    options(&[
                        ("student", 1.0),
                        ("early_career", 2.0),
                        ("mid_career", 4.0),
                        ("senior", 5.0),
                        ("career_changer", 3.0),
                    ]),
                ),
                (
                    EducationLevel,
                    options(&[
                        ("some_college", 1.0),
                        ("bachelors", 3.0),
                        ("graduate", 4.0),
                    ]),
                ),
                (
                    SkillStrengths,
                    options(&[
                        ("leadership", 5.0),
                        ("communication", 4.0),
                        ("technical", 2.0),
                        ("research", 1.0),
                    ]),
                ),
                (
                    FieldOfStudy,
                    options(&[
                        ("business", 5.0),
                        ("finance_accounting", 3.0),
                        ("social_sciences", 2.0),
                        ("engineering", 2.0),
                        ("computer_science", 1.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("leadership", 5.0),
                        ("presenting", 3.0),
                        ("negotiation", 3.0),
                        ("problem_solving", 3.0),
                        ("collaboration", 3.0),
                        ("data_analysis", 2.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("strategizing", 5.0),
                        ("optimizing", 4.0),
                        ("connecting", 3.0),
                        ("helping", 1.0),
                    ]),
                ),
                (ProblemType, options(&[("business", 5.0), ("people", 4.0), ("analytical", 2.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("business_management", 5.0),
                        ("finance_accounting", 2.0),
                        ("marketing_sales", 2.0),
                    ]),
                ),
                (
                    WorkStyle,
                    options(&[
                        ("structured", 4.0),
                        ("collaborative", 4.0),
                        ("dynamic", 3.0),
                    ]),
                ),
                (
                    CareerPriority,
                    options(&[
                        ("compensation", 4.0),
                        ("growth", 4.0),
                        ("security", 2.0),
                        ("impact", 2.0),
                    ]),
                ),
                (RiskTolerance, tiers(1.0, 3.0, 4.0)),
            ],
            skills: &[
                "Stakeholder management",
                "Strategic planning",
                "Financial literacy",
                "Project management",
                "Negotiation",
            ],
            jobs: &[
                "Product Manager",
                "Operations Manager",
                "Management Consultant",
                "Business Analyst",
                "Project Manager",
            ],
            resources: &[
                ("Harvard Business Review", "https://hbr.org"),
                ("Project Management Institute", "https://www.pmi.org"),
            ],
        }
        .build(),
        Entry {
            id: "finance_accounting",
            title: "Finance & Accounting",
            description: "Manage money, measure performance and keep financial decisions sound and compliant.",
            icon: "💰",
            weights: vec![
                (
                    EducationLevel,
                    options(&[
                        ("some_college", 1.0),
                        ("bachelors", 3.0),
                        ("graduate", 4.0),
                    ]),
                ),
                (
                    SkillStrengths,
                    options(&[
                        ("technical", 5.0),
                        ("research", 3.0),
                        ("communication", 1.0),
                        ("leadership", 1.0),
                    ]),
                ),
                (
                    FieldOfStudy,
                    options(&[
                        ("finance_accounting", 5.0),
                        ("business", 4.0),
                        ("computer_science", 2.0),
                        ("engineering", 2.0),
                        ("science", 1.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("data_analysis", 5.0),
                        ("problem_solving", 3.0),
                        ("negotiation", 2.0),
                        ("research", 2.0),
                        ("writing", 1.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("analyzing", 5.0),
                        ("optimizing", 4.0),
                        ("strategizing", 3.0),
                    ]),
                ),
                (
                    ProblemType,
                    options(&[
                        ("analytical", 5.0),
                        ("business", 4.0),
                        ("technical", 2.0),
                    ]),
                ),
                (
                    IndustryInterest,
                    options(&[
                        ("finance_accounting", 5.0),
                        ("business_management", 2.0),
                    ]),
                ),
                (
                    WorkStyle,
                    options(&[
                        ("structured", 5.0),
                        ("collaborative", 2.0),
                        ("independent", 2.0),
                    ]),
                ),
                (
                    CareerPriority,
                    options(&[
                        ("compensation", 5.0),
                        ("security", 4.0),
                        ("growth", 2.0),
                        ("balance", 1.0),
                    ]),
                ),
                (RiskTolerance, tiers(4.0, 3.0, 2.0)),
            ],
            skills: &[
                "Financial modeling",
                "Spreadsheets",
                "Accounting standards",
                "Attention to detail",
                "Reporting",
            ],
            jobs: &[
                "Accountant",
                "Financial Analyst",
                "Investment Banker",
                "Auditor",
                "Tax Advisor",
            ],
            resources: &[
                ("CFA Institute", "https://www.cfainstitute.org"),
                ("Khan Academy: Finance", "https://www.khanacademy.org/economics-finance-domain"),
            ],
        }
        .build(),
        Entry {
            id: "healthcare_life_sciences",
            title: "Healthcare & Life Sciences",
            description: "Care for patients and advance medicine, public health and the biosciences.",
            icon: "🏥",
            weights: vec![
                (
                    EducationLevel,
                    options(&[
                        ("some_college", 2.0),
                        ("bachelors", 3.0),
                        ("graduate", 4.0),
                    ]),
                ),
                (
                    SkillStrengths,
                    options(&[
                        ("research", 4.0),
                        ("communication", 3.0),
                        ("technical", 3.0),
                        ("leadership", 1.0),
                    ]),
                ),
                (
                    FieldOfStudy,
                    options(&[
                        ("healthcare_medicine", 5.0),
                        ("science", 4.0),
                        ("social_sciences", 2.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("healthcare", 5.0),
                        ("scientific_lab", 4.0),
                        ("research", 3.0),
                        ("teaching", 2.0),
                        ("customer_service", 2.0),
                        ("collaboration", 2.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("helping", 5.0),
                        ("analyzing", 3.0),
                        ("learning", 3.0),
                    ]),
                ),
                (ProblemType, options(&[("analytical", 4.0), ("people", 3.0), ("technical", 2.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("healthcare_life_sciences", 5.0),
                        ("science_research", 3.0),
                        ("social_impact_nonprofit", 2.0),
                    ]),
                ),
                (
                    WorkStyle,
                    options(&[
                        ("mission_driven", 5.0),
                        ("collaborative", 4.0),
                        ("structured", 3.0),
                    ]),
                ),
                (
                    CareerPriority,
                    options(&[
                        ("impact", 5.0),
                        ("security", 4.0),
                        ("compensation", 2.0),
                    ]),
                ),
                (RiskTolerance, tiers(4.0, 3.0, 1.0)),
            ],
            skills: &[
                "Patient care",
                "Clinical knowledge",
                "Research methods",
                "Empathy",
                "Data literacy",
            ],
            jobs: &[
                "Doctor",
                "Nurse",
                "Public Health Analyst",
                "Biomedical Scientist",
                "Pharmacist",
            ],
            resources: &[
                ("World Health Organization", "https://www.who.int"),
                ("Coursera: Public Health", "https://www.coursera.org/browse/health/public-health"),
            ],
        }
        .build(),
        Entry {
            id: "education_training",
            title: "Education & Training",
            description: "Teach, mentor and design learning experiences for students and professionals.",
            icon: "🎓",
            weights: vec![
                (
                    ExperienceBackground,
                    options(&[
                        ("student", 2.0),
                        ("early_career", 2.0),
                        ("mid_career", 3.0),
                        ("senior", 3.0),
                        ("career_changer", 3.0),
                    ]),
                ),
                (
                    EducationLevel,
                    options(&[
                        ("some_college", 1.0),
                        ("bachelors", 3.0),
                        ("graduate", 4.0),
                    ]),
                ),
                (
                    SkillStrengths,
                    options(&[
                        ("communication", 5.0),
                        ("leadership", 3.0),
                        ("research", 2.0),
                        ("creative", 2.0),
                    ]),
                ),
                (
                    FieldOfStudy,
                    options(&[
                        ("education", 5.0),
                        ("arts_humanities", 3.0),
                        ("social_sciences", 3.0),
                        ("science", 2.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("teaching", 5.0),
                        ("presenting", 4.0),
                        ("writing", 3.0),
                        ("collaboration", 2.0),
                        ("leadership", 2.0),
                    ]),
                ),
                (WorkEnergizes, options(&[("helping", 5.0), ("learning", 4.0), ("creating", 2.0)])),
                (ProblemType, options(&[("people", 5.0), ("creative", 2.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("education_training", 5.0),
                        ("social_impact_nonprofit", 2.0),
                    ]),
                ),
                (
                    WorkStyle,
                    options(&[
                        ("mission_driven", 4.0),
                        ("collaborative", 4.0),
                        ("structured", 3.0),
                    ]),
                ),
                (CareerPriority, options(&[("impact", 5.0), ("balance", 4.0), ("security", 3.0)])),
                (RiskTolerance, tiers(4.0, 2.0, 1.0)),
            ],
            skills: &[
                "Curriculum design",
                "Public speaking",
                "Coaching",
                "Patience",
                "Assessment design",
            ],
            jobs: &[
                "Teacher",
                "Lecturer",
                "Instructional Designer",
                "Corporate Trainer",
                "Academic Advisor",
            ],
            resources: &[
                ("Edutopia", "https://www.edutopia.org"),
                (
                    "Coursera: Learning How to Learn",
                    "https://www.coursera.org/learn/learning-how-to-learn",
                ),
            ],
        }
        .build(),
        Entry {
            id: "creative_media_design",
            title: "Creative, Media & Design",
            description: "Shape how products, stories and brands look, feel and communicate.",
            icon: "🎨",
            weights: vec![
                (
                    SkillStrengths,
                    options(&[
                        ("creative", 5.0),
                        ("communication", 3.0),
                        ("technical", 1.0),
                    ]),
                ),
                (
                    FieldOfStudy,
                    options(&[
                        ("design_media", 5.0),
                        ("arts_humanities", 4.0),
                        ("computer_science", 2.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("design", 5.0),
                        ("writing", 3.0),
                        ("styling", 2.0),
                        ("coding", 2.0),
                        ("presenting", 2.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("creating", 5.0),
                        ("building", 3.0),
                        ("learning", 2.0),
                    ]),
                ),
                (ProblemType, options(&[("creative", 5.0), ("technical", 2.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("creative_media_design", 5.0),
                        ("marketing_sales", 2.0),
                        ("beauty_fashion", 2.0),
                    ]),
                ),
                (
                    WorkStyle,
                    options(&[
                        ("independent", 5.0),
                        ("dynamic", 4.0),
                        ("collaborative", 3.0),
                    ]),
                ),
                (
                    CareerPriority,
                    options(&[
                        ("growth", 3.0),
                        ("impact", 3.0),
                        ("balance", 3.0),
                        ("compensation", 1.0),
                    ]),
                ),
                (RiskTolerance, tiers(1.0, 3.0, 4.0)),
            ],
            skills: &[
                "Visual design",
                "Storytelling",
                "Design tools",
                "User research",
                "Portfolio building",
            ],
            jobs: &[
                "Graphic Designer",
                "UX Designer",
                "Content Creator",
                "Video Producer",
                "Art Director",
            ],
            resources: &[
                ("Nielsen Norman Group", "https://www.nngroup.com/articles/"),
                ("Behance", "https://www.behance.net"),
            ],
        }
        .build(),
        Entry {
            id: "marketing_sales",
            title: "Marketing, Sales & Communication",
            description: "Grow audiences and revenue by connecting products with the people who need them.",
            icon: "📣",
            weights: vec![
                (
                    SkillStrengths,
                    options(&[
                        ("communication", 5.0),
                        ("creative", 4.0),
                        ("leadership", 2.0),
                        ("technical", 1.0),
                    ]),
                ),
                (
                    FieldOfStudy,
                    options(&[
                        ("business", 4.0),
                        ("design_media", 4.0),
                        ("social_sciences", 3.0),
                        ("arts_humanities", 2.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("negotiation", 5.0),
                        ("presenting", 4.0),
                        ("writing", 3.0),
                        ("design", 2.0),
                        ("data_analysis", 2.0),
                        ("customer_service", 2.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("connecting", 5.0),
                        ("creating", 4.0),
                        ("strategizing", 3.0),
                    ]),
                ),
                (ProblemType, options(&[("business", 4.0), ("creative", 4.0), ("people", 3.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("marketing_sales", 5.0),
                        ("business_management", 2.0),
                        ("creative_media_design", 2.0),
                    ]),
                ),
                (
                    WorkStyle,
                    options(&[
                        ("dynamic", 5.0),
                        ("collaborative", 4.0),
                        ("independent", 2.0),
                    ]),
                ),
                (CareerPriority, options(&[("compensation", 4.0), ("growth", 4.0)])),
                (RiskTolerance, tiers(1.0, 3.0, 5.0)),
            ],
            skills: &[
                "Copywriting",
                "Digital marketing",
                "Analytics",
                "Relationship building",
                "Negotiation",
            ],
            jobs: &[
                "Digital Marketer",
                "Sales Executive",
                "PR Manager",
                "Growth Strategist",
                "Brand Manager",
            ],
            resources: &[
                ("Google Skillshop", "https://skillshop.withgoogle.com"),
                ("HubSpot Academy", "https://academy.hubspot.com"),
            ],
        }
        .build(),
        Entry {
            id: "law_government",
            title: "Law, Government & Public Services",
            description: "Interpret and shape the rules that govern society and serve the public interest.",
            icon: "⚖️",
            weights: vec![
                (EducationLevel, options(&[("bachelors", 3.0), ("graduate", 5.0)])),
                (
                    SkillStrengths,
                    options(&[
                        ("research", 4.0),
                        ("communication", 4.0),
                        ("leadership", 2.0),
                    ]),
                ),
                (
                    FieldOfStudy,
                    options(&[
                        ("law", 5.0),
                        ("social_sciences", 4.0),
                        ("arts_humanities", 2.0),
                        ("business", 2.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("legal_policy", 5.0),
                        ("writing", 4.0),
                        ("research", 4.0),
                        ("negotiation", 3.0),
                        ("presenting", 2.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("analyzing", 4.0),
                        ("strategizing", 3.0),
                        ("helping", 3.0),
                    ]),
                ),
                (ProblemType, options(&[("people", 4.0), ("analytical", 4.0), ("business", 2.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("law_government", 5.0),
                        ("social_impact_nonprofit", 2.0),
                    ]),
                ),
                (WorkStyle, options(&[("structured", 5.0), ("mission_driven", 3.0)])),
                (
                    CareerPriority,
                    options(&[
                        ("security", 5.0),
                        ("impact", 4.0),
                        ("compensation", 3.0),
                    ]),
                ),
                (RiskTolerance, tiers(5.0, 3.0, 1.0)),
            ],
            skills: &["Legal research", "Policy analysis", "Writing", "Argumentation", "Ethics"],
            jobs: &["Lawyer", "Policy Analyst", "Civil Servant", "Diplomat", "Paralegal"],
            resources: &[
                ("USAJOBS", "https://www.usajobs.gov"),
                ("Cornell Legal Information Institute", "https://www.law.cornell.edu"),
            ],
        }
        .build(),
        Entry {
            id: "science_research",
            title: "Science, Research & Data",
            description: "Investigate open questions and turn data into knowledge.",
            icon: "🔬",
            weights: vec![
                (EducationLevel, options(&[("bachelors", 3.0), ("graduate", 5.0)])),
                (SkillStrengths, options(&[("research", 5.0), ("technical", 4.0)])),
                (
                    FieldOfStudy,
                    options(&[
                        ("science", 5.0),
                        ("computer_science", 3.0),
                        ("engineering", 3.0),
                        ("healthcare_medicine", 2.0),
                        ("social_sciences", 2.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("research", 5.0),
                        ("scientific_lab", 5.0),
                        ("data_analysis", 4.0),
                        ("problem_solving", 3.0),
                        ("coding", 2.0),
                        ("writing", 2.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("analyzing", 5.0),
                        ("learning", 5.0),
                        ("building", 2.0),
                    ]),
                ),
                (ProblemType, options(&[("analytical", 5.0), ("technical", 4.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("science_research", 5.0),
                        ("healthcare_life_sciences", 2.0),
                        ("technology_engineering", 2.0),
                    ]),
                ),
                (
                    WorkStyle,
                    options(&[
                        ("independent", 4.0),
                        ("structured", 3.0),
                        ("collaborative", 3.0),
                    ]),
                ),
                (CareerPriority, options(&[("growth", 4.0), ("impact", 4.0), ("security", 2.0)])),
                (RiskTolerance, tiers(3.0, 3.0, 2.0)),
            ],
            skills: &[
                "Statistics",
                "Experimental design",
                "Python or R",
                "Scientific writing",
                "Critical thinking",
            ],
            jobs: &[
                "Research Scientist",
                "Data Scientist",
                "Lab Analyst",
                "Statistician",
                "Research Assistant",
            ],
            resources: &[
                ("Kaggle Learn", "https://www.kaggle.com/learn"),
                ("Nature Careers", "https://www.nature.com/naturecareers"),
            ],
        }
        .build(),
        Entry {
            id: "manufacturing_construction",
            title: "Manufacturing, Construction & Trades",
            description: "Build, install and maintain the physical world, from buildings to production lines.",
            icon: "🏗️",
            weights: vec![
                (
                    EducationLevel,
                    options(&[
                        ("high_school", 3.0),
                        ("some_college", 4.0),
                        ("bachelors", 2.0),
                    ]),
                ),
                (SkillStrengths, options(&[("technical", 5.0), ("leadership", 3.0)])),
                (FieldOfStudy, options(&[("trades_vocational", 5.0), ("engineering", 4.0)])),
                (
                    EnjoyedSkills,
                    options(&[
                        ("hands_on_work", 5.0),
                        ("problem_solving", 3.0),
                        ("leadership", 2.0),
                        ("collaboration", 2.0),
                    ]),
                ),
                (WorkEnergizes, options(&[("building", 5.0), ("optimizing", 4.0)])),
                (ProblemType, options(&[("technical", 5.0), ("business", 1.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("manufacturing_construction", 5.0),
                        ("technology_engineering", 2.0),
                    ]),
                ),
                (
                    WorkStyle,
                    options(&[
                        ("structured", 4.0),
                        ("collaborative", 3.0),
                        ("independent", 2.0),
                    ]),
                ),
                (CareerPriority, options(&[("security", 4.0), ("compensation", 3.0)])),
                (RiskTolerance, tiers(3.0, 3.0, 2.0)),
            ],
            skills: &[
                "Blueprint reading",
                "Safety standards",
                "Tool operation",
                "Project scheduling",
                "Quality control",
            ],
            jobs: &[
                "Civil Engineer",
                "Architect",
                "Electrician",
                "Construction Manager",
                "Manufacturing Technician",
            ],
            resources: &[
                ("OSHA Training", "https://www.osha.gov/training"),
                ("Apprenticeship.gov", "https://www.apprenticeship.gov"),
            ],
        }
        .build(),
        Entry {
            id: "hospitality_service",
            title: "Hospitality, Travel & Service",
            description: "Create great experiences for guests, travelers and customers.",
            icon: "🏨",
            weights: vec![
                (
                    EducationLevel,
                    options(&[
                        ("high_school", 3.0),
                        ("some_college", 3.0),
                        ("bachelors", 2.0),
                    ]),
                ),
                (
                    SkillStrengths,
                    options(&[
                        ("communication", 5.0),
                        ("leadership", 3.0),
                        ("creative", 2.0),
                    ]),
                ),
                (
                    FieldOfStudy,
                    options(&[
                        ("business", 3.0),
                        ("arts_humanities", 2.0),
                        ("social_sciences", 2.0),
                        ("other", 2.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("customer_service", 5.0),
                        ("event_planning", 5.0),
                        ("collaboration", 3.0),
                        ("presenting", 2.0),
                        ("negotiation", 2.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("connecting", 5.0),
                        ("helping", 4.0),
                        ("optimizing", 2.0),
                    ]),
                ),
                (ProblemType, options(&[("people", 5.0), ("business", 2.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("hospitality_service", 5.0),
                        ("marketing_sales", 1.0),
                    ]),
                ),
                (WorkStyle, options(&[("collaborative", 5.0), ("dynamic", 4.0)])),
                (CareerPriority, options(&[("growth", 3.0), ("balance", 2.0)])),
                (RiskTolerance, tiers(2.0, 3.0, 3.0)),
            ],
            skills: &[
                "Customer experience",
                "Event coordination",
                "Conflict resolution",
                "Multitasking",
                "Languages",
            ],
            jobs: &[
                "Hotel Manager",
                "Event Planner",
                "Travel Consultant",
                "Customer Success Manager",
                "Restaurant Manager",
            ],
            resources: &[
                ("American Hotel & Lodging Educational Institute", "https://www.ahlei.org"),
                ("Events Industry Council", "https://www.eventscouncil.org"),
            ],
        }
        .build(),
        Entry {
            id: "social_impact_nonprofit",
            title: "Social Impact, Non-Profit & Community",
            description: "Drive programs and campaigns that improve communities and lives.",
            icon: "🌍",
            weights: vec![
                (
                    SkillStrengths,
                    options(&[
                        ("communication", 4.0),
                        ("leadership", 4.0),
                        ("research", 2.0),
                        ("creative", 2.0),
                    ]),
                ),
                (
                    FieldOfStudy,
                    options(&[
                        ("social_sciences", 5.0),
                        ("education", 3.0),
                        ("arts_humanities", 3.0),
                        ("law", 2.0),
                        ("business", 2.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("collaboration", 4.0),
                        ("teaching", 3.0),
                        ("writing", 3.0),
                        ("leadership", 3.0),
                        ("event_planning", 3.0),
                        ("presenting", 2.0),
                        ("legal_policy", 2.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("helping", 5.0),
                        ("connecting", 4.0),
                        ("strategizing", 3.0),
                    ]),
                ),
                (ProblemType, options(&[("people", 5.0), ("business", 2.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("social_impact_nonprofit", 5.0),
                        ("education_training", 2.0),
                        ("healthcare_life_sciences", 1.0),
                    ]),
                ),
                (WorkStyle, options(&[("mission_driven", 5.0), ("collaborative", 4.0)])),
                (CareerPriority, options(&[("impact", 5.0), ("balance", 3.0)])),
                (RiskTolerance, tiers(2.0, 3.0, 3.0)),
            ],
            skills: &[
                "Program management",
                "Grant writing",
                "Community outreach",
                "Fundraising",
                "Impact measurement",
            ],
            jobs: &[
                "NGO Program Manager",
                "Social Worker",
                "Fundraising Manager",
                "Community Organizer",
                "Policy Advocate",
            ],
            resources: &[
                ("Idealist", "https://www.idealist.org"),
                ("Candid Learning", "https://learning.candid.org"),
            ],
        }
        .build(),
        Entry {
            id: "beauty_fashion",
            title: "Beauty, Fashion & Lifestyle",
            description: "Create, style and sell the looks and products people use to express themselves.",
            icon: "👗",
            weights: vec![
                (SkillStrengths, options(&[("creative", 5.0), ("communication", 3.0)])),
                (
                    FieldOfStudy,
                    options(&[
                        ("design_media", 4.0),
                        ("arts_humanities", 3.0),
                        ("business", 2.0),
                        ("trades_vocational", 2.0),
                    ]),
                ),
                (
                    EnjoyedSkills,
                    options(&[
                        ("styling", 5.0),
                        ("design", 4.0),
                        ("customer_service", 3.0),
                        ("hands_on_work", 2.0),
                        ("negotiation", 2.0),
                    ]),
                ),
                (
                    WorkEnergizes,
                    options(&[
                        ("creating", 5.0),
                        ("connecting", 3.0),
                        ("building", 2.0),
                    ]),
                ),
                (ProblemType, options(&[("creative", 5.0), ("business", 2.0), ("people", 2.0)])),
                (
                    IndustryInterest,
                    options(&[
                        ("beauty_fashion", 5.0),
                        ("creative_media_design", 2.0),
                        ("marketing_sales", 1.0),
                    ]),
                ),
                (WorkStyle, options(&[("dynamic", 5.0), ("independent", 4.0)])),
                (
                    CareerPriority,
                    options(&[
                        ("growth", 3.0),
                        ("compensation", 2.0),
                        ("balance", 2.0),
                    ]),
                ),
                (RiskTolerance, tiers(1.0, 3.0, 4.0)),
            ],
            skills: &[
                "Trend awareness",
                "Styling",
                "Visual merchandising",
                "Client relations",
                "Brand sense",
            ],
            jobs: &["Fashion Designer", "Stylist", "Makeup Artist", "Brand Buyer", "Merchandiser"],
            resources: &[
                ("Business of Fashion", "https://www.businessoffashion.com"),
                ("Fashion Institute of Technology", "https://www.fitnyc.edu"),
            ],
        }
        .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_career_ids_are_unique() {
        let careers = builtin_careers();
        let ids: HashSet<_> = careers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), careers.len());
        assert_eq!(careers.len(), 13);
    }

    #[test]
    fn test_every_career_is_fully_described() {
        for career in builtin_careers() {
            assert!(!career.weights.is_empty(), "{} has no weights", career.id);
            assert!(!career.example_jobs.is_empty(), "{} has no jobs", career.id);
            assert!(!career.resources.is_empty(), "{} has no resources", career.id);
        }
    }

    #[test]
    fn test_every_career_weights_its_own_industry_highest() {
        for career in builtin_careers() {
            let Some(QuestionWeights::Options(table)) =
                career.weights.get(&QuestionId::IndustryInterest)
            else {
                panic!("{} does not weight industry_interest", career.id);
            };
            assert_eq!(table.get(&career.id).copied(), Some(5.0), "{}", career.id);
        }
    }
}
