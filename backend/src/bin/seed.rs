//! Seeds the database with the Omani school evaluation taxonomy and a
//! default System Manager account. Safe to run repeatedly: the admin upsert
//! is keyed on email and the taxonomy load is skipped once axes exist.

use std::env;

use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ses_backend::config::Config;
use ses_backend::db::connection::create_pool;
use ses_backend::models::user::{User, UserRole};
use ses_backend::repositories::{taxonomy, user as user_repo};
use ses_backend::utils::password::hash_password;

struct SeedAxis {
    id: &'static str,
    name_en: &'static str,
    name_ar: &'static str,
}

struct SeedDomain {
    code: &'static str,
    name_en: &'static str,
    name_ar: &'static str,
    axis_id: &'static str,
    standards: &'static [SeedStandard],
}

struct SeedStandard {
    code: &'static str,
    name_en: &'static str,
    name_ar: &'static str,
    indicators: &'static [SeedIndicator],
}

struct SeedIndicator {
    code: &'static str,
    description_en: &'static str,
    description_ar: &'static str,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,ses_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_admin_user(&pool).await?;
    seed_taxonomy(&pool).await?;

    tracing::info!("Database seeding finished");
    Ok(())
}

async fn seed_admin_user(pool: &PgPool) -> anyhow::Result<()> {
    let email = env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let password = env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "Admin@123".to_string());

    let admin = User::new(
        email,
        "Admin User".to_string(),
        hash_password(&password)?,
        UserRole::SystemManager,
    );

    if user_repo::insert_user_if_missing(pool, &admin).await? {
        tracing::info!(email = %admin.email, "Created admin user");
    } else {
        tracing::info!(email = %admin.email, "Admin user already exists; left unchanged");
    }
    Ok(())
}

async fn seed_taxonomy(pool: &PgPool) -> anyhow::Result<()> {
    if taxonomy::count_axes(pool).await? > 0 {
        tracing::info!("Taxonomy already present; skipping");
        return Ok(());
    }

    let mut tx = pool.begin().await?;

    for axis in AXES {
        sqlx::query("INSERT INTO axes (id, name_en, name_ar) VALUES ($1, $2, $3)")
            .bind(axis.id)
            .bind(axis.name_en)
            .bind(axis.name_ar)
            .execute(tx.as_mut())
            .await?;
    }

    for domain in DOMAINS {
        let domain_id = format!("domain-{}", domain.code.to_lowercase());
        sqlx::query(
            "INSERT INTO domains (id, code, name_en, name_ar, axis_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&domain_id)
        .bind(domain.code)
        .bind(domain.name_en)
        .bind(domain.name_ar)
        .bind(domain.axis_id)
        .execute(tx.as_mut())
        .await?;

        for standard in domain.standards {
            let standard_id = format!("standard-{}", standard.code.replace('.', "-"));
            sqlx::query(
                "INSERT INTO standards (id, code, name_en, name_ar, domain_id) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&standard_id)
            .bind(standard.code)
            .bind(standard.name_en)
            .bind(standard.name_ar)
            .bind(&domain_id)
            .execute(tx.as_mut())
            .await?;

            for indicator in standard.indicators {
                sqlx::query(
                    "INSERT INTO indicators (id, code, description_en, description_ar, standard_id) \
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(format!("indicator-{}", indicator.code.replace('.', "-")))
                .bind(indicator.code)
                .bind(indicator.description_en)
                .bind(indicator.description_ar)
                .bind(&standard_id)
                .execute(tx.as_mut())
                .await?;
            }
        }

        tracing::info!(code = domain.code, name = domain.name_en, "Seeded domain");
    }

    tx.commit().await?;
    tracing::info!(
        axes = AXES.len(),
        domains = DOMAINS.len(),
        "Seeded evaluation taxonomy"
    );
    Ok(())
}

// Axis ids sort in presentation order, which is what the tree endpoint
// orders by.
const AXES: &[SeedAxis] = &[
    SeedAxis {
        id: "axis-1",
        name_en: "Quality of Learning Outcomes",
        name_ar: "جودة نواتج التعلم",
    },
    SeedAxis {
        id: "axis-2",
        name_en: "Quality of School Processes",
        name_ar: "جودة عمليات المدرسة",
    },
    SeedAxis {
        id: "axis-3",
        name_en: "Assurance of Learning and School Processes Quality",
        name_ar: "ضمان جودة التعلم وعمليات المدرسة",
    },
];

const DOMAINS: &[SeedDomain] = &[
    SeedDomain {
        code: "D1",
        name_en: "Academic Achievement",
        name_ar: "الإنجاز الدراسي",
        axis_id: "axis-1",
        standards: &[
            SeedStandard {
                code: "1.1",
                name_en: "Academic Achievement",
                name_ar: "التحصيل الدراسي",
                indicators: &[
                    SeedIndicator {
                        code: "1.1.1",
                        description_en: "Achievement Levels",
                        description_ar: "المستويات التحصيلية",
                    },
                    SeedIndicator {
                        code: "1.1.2",
                        description_en: "Achievement in Classroom and Non-Classroom Activities",
                        description_ar: "التحصيل في الأعمال الصفية وغير الصفية",
                    },
                    SeedIndicator {
                        code: "1.1.3",
                        description_en: "Equity of Academic Achievement",
                        description_ar: "عدالة التحصيل الدراسي",
                    },
                ],
            },
            SeedStandard {
                code: "1.2",
                name_en: "Academic Progress",
                name_ar: "التقدم الدراسي",
                indicators: &[
                    SeedIndicator {
                        code: "1.2.1",
                        description_en: "Achievement Levels Over Time",
                        description_ar: "المستويات التحصيلية بمرور الوقت",
                    },
                    SeedIndicator {
                        code: "1.2.2",
                        description_en: "Academic Progress in Classroom Sessions",
                        description_ar: "التقدم الدراسي في الحصص الدراسية",
                    },
                    SeedIndicator {
                        code: "1.2.3",
                        description_en: "Progress of Students with Special Needs",
                        description_ar: "تقدم الطلبة ذوي الاحتياجات الخاصة",
                    },
                ],
            },
            SeedStandard {
                code: "1.3",
                name_en: "Learning Skills",
                name_ar: "مهارات التعلم",
                indicators: &[
                    SeedIndicator {
                        code: "1.3.1",
                        description_en: "Self-Learning Skills",
                        description_ar: "مهارات التعلم الذاتي",
                    },
                    SeedIndicator {
                        code: "1.3.2",
                        description_en: "Collaborative Learning Skills",
                        description_ar: "مهارات التعلم التعاوني",
                    },
                    SeedIndicator {
                        code: "1.3.3",
                        description_en: "Higher-Order Thinking Skills",
                        description_ar: "مهارات التفكير العليا",
                    },
                    SeedIndicator {
                        code: "1.3.4",
                        description_en: "Application of Learning in Daily Life",
                        description_ar: "تطبيق التعلم في الحياة اليومية",
                    },
                    SeedIndicator {
                        code: "1.3.5",
                        description_en: "Digital Skills",
                        description_ar: "المهارات الرقمية",
                    },
                    SeedIndicator {
                        code: "1.3.6",
                        description_en: "Reading Culture",
                        description_ar: "ثقافة القراءة",
                    },
                ],
            },
        ],
    },
    SeedDomain {
        code: "D2",
        name_en: "Personal Growth",
        name_ar: "النمو الشخصي",
        axis_id: "axis-1",
        standards: &[
            SeedStandard {
                code: "2.1",
                name_en: "Values and Behavior",
                name_ar: "القيم والسلوك",
                indicators: &[
                    SeedIndicator {
                        code: "2.1.1",
                        description_en: "Adherence to Shared Human Values",
                        description_ar: "التمسك بالقيم الإنسانية المشتركة",
                    },
                    SeedIndicator {
                        code: "2.1.2",
                        description_en: "Awareness of Rights and Duties",
                        description_ar: "إدراك الحقوق والواجبات",
                    },
                    SeedIndicator {
                        code: "2.1.3",
                        description_en: "Enthusiasm and Motivation for Learning",
                        description_ar: "الحماس والدافعية للتعلم",
                    },
                ],
            },
            SeedStandard {
                code: "2.2",
                name_en: "Identity and Citizenship",
                name_ar: "الهوية والمواطنة",
                indicators: &[
                    SeedIndicator {
                        code: "2.2.1",
                        description_en: "Pride in Omani Identity, History, Culture, Loyalty to the Nation and the Sultan",
                        description_ar: "الاعتزاز بالهوية العُمانية وتاريخ سلطنة عمان وثقافتها، والولاء للوطن والسلطان",
                    },
                    SeedIndicator {
                        code: "2.2.2",
                        description_en: "Belonging to the Arab and Islamic Identity, and Appreciation of the Arabic Language",
                        description_ar: "الانتماء للهوية العربية والإسلامية، وتقدير اللغة العربية",
                    },
                    SeedIndicator {
                        code: "2.2.3",
                        description_en: "Participation in Volunteer Work",
                        description_ar: "المشاركة في العمل التطوعي",
                    },
                    SeedIndicator {
                        code: "2.2.4",
                        description_en: "Practicing Consultation and Electoral Culture",
                        description_ar: "ممارسات الشورى والثقافة الانتخابية",
                    },
                ],
            },
            SeedStandard {
                code: "2.3",
                name_en: "Health and Environmental Awareness",
                name_ar: "الوعي الصحي والبيئي",
                indicators: &[
                    SeedIndicator {
                        code: "2.3.1",
                        description_en: "Commitment to Healthy and Safe Lifestyles",
                        description_ar: "الالتزام بأنماط الحياة السليمة والصحية",
                    },
                    SeedIndicator {
                        code: "2.3.2",
                        description_en: "Participation in Environmental and Climate Issues",
                        description_ar: "المشاركة في قضايا البيئة والمناخ",
                    },
                ],
            },
            SeedStandard {
                code: "2.4",
                name_en: "Innovation and Entrepreneurship",
                name_ar: "الابتكار وريادة الأعمال",
                indicators: &[
                    SeedIndicator {
                        code: "2.4.1",
                        description_en: "Initiative in Presenting Ideas and Launching Projects",
                        description_ar: "المبادرة في طرح الأفكار وإطلاق المشروعات",
                    },
                    SeedIndicator {
                        code: "2.4.2",
                        description_en: "Project Management to Achieve Results",
                        description_ar: "إدارة المشروعات لتحقيق النتائج",
                    },
                    SeedIndicator {
                        code: "2.4.3",
                        description_en: "Commitment to Work Ethics",
                        description_ar: "الالتزام بأخلاقيات العمل",
                    },
                    SeedIndicator {
                        code: "2.4.4",
                        description_en: "Communication and Team Leadership",
                        description_ar: "التواصل وقيادة الفرق",
                    },
                ],
            },
        ],
    },
    SeedDomain {
        code: "D3",
        name_en: "Instruction and Assessment",
        name_ar: "التدريس والتقويم",
        axis_id: "axis-2",
        standards: &[
            SeedStandard {
                code: "3.1",
                name_en: "Curriculum Planning",
                name_ar: "تخطيط المنهاج الدراسي",
                indicators: &[
                    SeedIndicator {
                        code: "3.1.1",
                        description_en: "Curriculum Planning to Achieve Learning Goals and Meet Student Needs",
                        description_ar: "تخطيط المنهاج الدراسي لتحقيق الكفايات، وتلبية احتياجات الطلبة",
                    },
                    SeedIndicator {
                        code: "3.1.2",
                        description_en: "Linking Study Materials to Support Curriculum Integration",
                        description_ar: "الربط بين المواد الدراسية لدعم التكامل المنهجي و ربط المنهاج بثقافة سلطنة عمان",
                    },
                    SeedIndicator {
                        code: "3.1.3",
                        description_en: "Alignment of the Curriculum with the following, considering student needs and differences",
                        description_ar: "مواءمة المنهاج بما يلي احتياجات جميع الطلبة ويراعي التمايز بينهم",
                    },
                ],
            },
            SeedStandard {
                code: "3.2",
                name_en: "Classroom Management",
                name_ar: "إدارة الصف",
                indicators: &[
                    SeedIndicator {
                        code: "3.2.1",
                        description_en: "Management of Learning Time",
                        description_ar: "إدارة زمن التعلم",
                    },
                    SeedIndicator {
                        code: "3.2.2",
                        description_en: "Management of Student Behavior",
                        description_ar: "إدارة سلوك الطلبة",
                    },
                    SeedIndicator {
                        code: "3.2.3",
                        description_en: "Arousing Intrinsic Motivation for Learning commensurate with student abilities and maturity",
                        description_ar: "إثارة الدافعية للتعلم بما يتلاءم مع قدرات الطلبة و فئاتهم",
                    },
                ],
            },
            SeedStandard {
                code: "3.3",
                name_en: "Effectiveness of Instruction",
                name_ar: "فاعلية التدريس",
                indicators: &[
                    SeedIndicator {
                        code: "3.3.1",
                        description_en: "Teachers' Presentation of Lesson Content and Use of Learning Strategies",
                        description_ar: "تقديم المعلمين لمحتوى الدروس، واستخدام استراتيجيات التعلم",
                    },
                    SeedIndicator {
                        code: "3.3.2",
                        description_en: "Language of Instruction to Facilitate Learning",
                        description_ar: "لغة التدريس لتعزيز التعلم",
                    },
                    SeedIndicator {
                        code: "3.3.3",
                        description_en: "Employing Educational Resources and Means, including e-learning programs and platforms",
                        description_ar: "توظيف المصادر والوسائل التعليمية، بما في ذلك برامج التعلم الإلكتروني ومنصاته",
                    },
                    SeedIndicator {
                        code: "3.3.4",
                        description_en: "Enabling Students to Express their Opinions, apply what they learned, and learn from their mistakes",
                        description_ar: "تمكين الطلبة من التعبير عن آرائهم، وتطبيق ما تعلموه، والتعلم من أخطائهم",
                    },
                    SeedIndicator {
                        code: "3.3.5",
                        description_en: "Alignment of Teaching Strategies with the needs of students with special needs and disabilities",
                        description_ar: "مواءمة استراتيجيات التدريس مع متطلبات ذوي الاحتياجات الخاصة والإعاقة",
                    },
                ],
            },
            SeedStandard {
                code: "3.4",
                name_en: "Excellence in Learning Skills",
                name_ar: "تعزيز مهارات التعلم",
                indicators: &[
                    SeedIndicator {
                        code: "3.4.1",
                        description_en: "Linking Learning with Students' Realities and Lives",
                        description_ar: "ربط التعلم بواقع الطلبة وحياتهم",
                    },
                    SeedIndicator {
                        code: "3.4.2",
                        description_en: "Developing the Ability for Inquiry, Critical Thinking, and Reflection beyond the scope of study materials, enabling continuous learning",
                        description_ar: "تعزيز القدرة على التساؤل و التفكير التدبر بما يتعدى مساحة المواد الدراسية و يمكن من مواصلة التعلم",
                    },
                    SeedIndicator {
                        code: "3.4.3",
                        description_en: "Promoting Self-Learning and Collaborative Learning Skills",
                        description_ar: "تعزيز مهارات التعلم الذاتي والتعلم التعاوني",
                    },
                    SeedIndicator {
                        code: "3.4.4",
                        description_en: "Developing the Spirit of Initiative, Entrepreneurship, and Adaptability to Variables",
                        description_ar: "تنمية روح المبادرة، وتعزيز التكيف مع المتغيرات",
                    },
                    SeedIndicator {
                        code: "3.4.5",
                        description_en: "Developing Oral and Calculation Skills, and Promoting Reading Culture",
                        description_ar: "تنمية مهارات التعلم القرائية والحسابية، وتعزيز ثقافة القراءة",
                    },
                    SeedIndicator {
                        code: "3.4.6",
                        description_en: "Developing Digital Skills",
                        description_ar: "تنمية المهارات الرقمية",
                    },
                ],
            },
            SeedStandard {
                code: "3.5",
                name_en: "Assessment and Support for Progress",
                name_ar: "التقويم ومساندة التقدم",
                indicators: &[
                    SeedIndicator {
                        code: "3.5.1",
                        description_en: "Employing Assessment Methods that account for differentiation and achieve learning goals",
                        description_ar: "توظيف أساليب تقويم تراعي التمايز وتضمن تحقق أهداف التعلم",
                    },
                    SeedIndicator {
                        code: "3.5.2",
                        description_en: "Applying Assessments according to Approved Standards",
                        description_ar: "تطبيق التقويمات حسب المعايير المعتمدة",
                    },
                    SeedIndicator {
                        code: "3.5.3",
                        description_en: "Employing Assessment Results in Support of Learning and Progress",
                        description_ar: "توظيف نتائج التقويم في دعم التعلم والتقدم فيه",
                    },
                    SeedIndicator {
                        code: "3.5.4",
                        description_en: "Follow-up in achieving learning goals and providing differentiation among students",
                        description_ar: "متابعة التقدم في تحقيق أهداف التعلم بما يراعي التمايز بين الطلبة",
                    },
                ],
            },
        ],
    },
    SeedDomain {
        code: "D4",
        name_en: "Learning Environment and Outcomes",
        name_ar: "مناخ المدرسة و بيئة التعلم",
        axis_id: "axis-2",
        standards: &[
            SeedStandard {
                code: "4.1",
                name_en: "Quality of the Learning Environment",
                name_ar: "جودة بيئة التعلم",
                indicators: &[
                    SeedIndicator {
                        code: "4.1.1",
                        description_en: "Safety and Security Procedures, and licensing by relevant authorities",
                        description_ar: "تدابير الأمن والسلامة وترخيصها من الجهات المختصة",
                    },
                    SeedIndicator {
                        code: "4.1.2",
                        description_en: "Monitoring school facilities, environment, and internal and external areas, including those for students with disabilities",
                        description_ar: "متابعة مرافق المدرسة الجسدية والبيئة الداخلية والمناطق فيها، بمن فيهم ذوو الإعاقة",
                    },
                    SeedIndicator {
                        code: "4.1.3",
                        description_en: "Cleanliness of school facilities and surroundings",
                        description_ar: "نظافة مرافق المدرسة و جاذبيتها",
                    },
                    SeedIndicator {
                        code: "4.1.4",
                        description_en: "Employing digital assessment and supporting platforms that aid in in-person learning and learning remotely",
                        description_ar: "تجهيز المرافق التعليمية بالوسائط الأمنة المساعدة عالتعلم الحضزري و التعلم عن بعد",
                    },
                ],
            },
            SeedStandard {
                code: "4.2",
                name_en: "Enhancing Student Talent",
                name_ar: " تعزيز مواهب الطلبة و قدراتهم",
                indicators: &[
                    SeedIndicator {
                        code: "4.2.1",
                        description_en: "A school environment that encourages students to discover their talents, skills, and potential",
                        description_ar: "بيئة مدرسية تشجع على اكتشاف قدرات الطلبة ومواهبهم",
                    },
                    SeedIndicator {
                        code: "4.2.2",
                        description_en: "Promoting student talents, skills, and nurturing them in line with their needs and abilities",
                        description_ar: "تعزيز مواهب الطلبة وقدراتهم، والاحتفاء بها وتطويرها بما يتماشى مع رغباتهم واحتياجاتهم ",
                    },
                ],
            },
            SeedStandard {
                code: "4.3",
                name_en: "Care and Support",
                name_ar: "الدعم والرعاية",
                indicators: &[
                    SeedIndicator {
                        code: "4.3.1",
                        description_en: "Promoting child rights culture",
                        description_ar: "تنمية ثقافة حقوق الطفل",
                    },
                    SeedIndicator {
                        code: "4.3.2",
                        description_en: "Attention to students' physical and mental health",
                        description_ar: "الاهتمام برعاية الطلبة جسدياً ونفسياً",
                    },
                    SeedIndicator {
                        code: "4.3.3",
                        description_en: "Providing care and support to students facing learning difficulties in their education or for other reasons",
                        description_ar: "دعم ورعاية الطلبة الذين يواجهون صعوبات في تعلمهم، لاحتياجاتهم الخاصة أو إعاقتهم أو لأسباب أخرى",
                    },
                    SeedIndicator {
                        code: "4.3.4",
                        description_en: "Building research skills and vocational guidance and supporting them in line with labor market trends and requirements",
                        description_ar: "تهيئة الطلبة للمسارات الأكاديمية و المهنية و دعمهم بما يتوافق مع ميولهم و متطلبات سوق العمل",
                    },
                    SeedIndicator {
                        code: "4.3.5",
                        description_en: "Guiding students towards their needs and requirements, and preparing them for transitioning to other educational stages",
                        description_ar: "تفهم مراحل نمو الطلبة و متطلباتها و تهيئة الطلبة للانتقال من مرحلة تعليمية الى اخرى",
                    },
                ],
            },
            SeedStandard {
                code: "4.4",
                name_en: "Development of Scientific Skills",
                name_ar: "تنمية مهارات البحث العلمي",
                indicators: &[
                    SeedIndicator {
                        code: "4.4.1",
                        description_en: "A school environment that encourages scientific research, commitment to ethical standards, and estimation of its value",
                        description_ar: "بيئة مدرسية تشجع على البحث العلمي والالتزام بأخلاقياته",
                    },
                    SeedIndicator {
                        code: "4.4.2",
                        description_en: "Role of the school in highlighting scientific and technical outputs and achievements",
                        description_ar: "نهج المدرسة في إبراز الإنتاج البحثي للطلبة وتقديره",
                    },
                ],
            },
        ],
    },
    SeedDomain {
        code: "D5",
        name_en: "Leadership, Administration, and Governance",
        name_ar: "القيادة والإدارة والحوكمة",
        axis_id: "axis-3",
        standards: &[
            SeedStandard {
                code: "5.1",
                name_en: "Leadership for Change",
                name_ar: "قيادة التغيير",
                indicators: &[
                    SeedIndicator {
                        code: "5.1.1",
                        description_en: "Vision and Mission of the school, involvement of the community in their development and implementation",
                        description_ar: "رؤية ورسالة يشارك المجتمع المدرسي في بنائها وتنفيذهما",
                    },
                    SeedIndicator {
                        code: "5.1.2",
                        description_en: "Self-evaluation and its use in strategic planning and improving performance",
                        description_ar: "التقويم الذاتي وتوظيفه في التخطيط الاستراتيجي وتحسين الأداء",
                    },
                    SeedIndicator {
                        code: "5.1.3",
                        description_en: "Joint and active work and communication with the school community to support improvement processes",
                        description_ar: "العمل المشترك والتواصل الفاعل مع المجتمع المدرسي لدعم عمليات التحسين",
                    },
                    SeedIndicator {
                        code: "5.1.4",
                        description_en: "Expectations towards the curriculum, students, and staff",
                        description_ar: "توقعات عالية تجاه العاملين بالمدرسة والطلبة",
                    },
                ],
            },
            SeedStandard {
                code: "5.2",
                name_en: "Leadership for Learning and Instruction",
                name_ar: "قيادة التعليم والتعلم",
                indicators: &[
                    SeedIndicator {
                        code: "5.2.1",
                        description_en: "School leadership guided by the curriculum, and instructional practices necessary to achieve learning goals",
                        description_ar: "إلمام قيادة المدرسة بالمناهج وممارسات التدريس الضرورية لتحقيق أهداف التعلم",
                    },
                    SeedIndicator {
                        code: "5.2.2",
                        description_en: "Supervision of the education and learning process that supports student differentiation and progress",
                        description_ar: "الإشراف على عمليتي التعليم والتعلم بما يدعم تعلم الطلبة ويراعي التمايز بينهم",
                    },
                    SeedIndicator {
                        code: "5.2.3",
                        description_en: "Professional growth directed at improving instruction, and raising student performance levels",
                        description_ar: "إنماء مهني للمعلمين موجه لتجويد التدريس، ورفع مستوى أداء الطلبة",
                    },
                    SeedIndicator {
                        code: "5.2.4",
                        description_en: "Student involvement in improving the learning process",
                        description_ar: "إشراك الطلبة في تحسين عمليات التعليم",
                    },
                    SeedIndicator {
                        code: "5.2.5",
                        description_en: "Formation of professional learning communities within the school and with other schools",
                        description_ar: "تكوين مجتمعات تعلم مهنية داخل المدرسة، ومع المدارس الأخرى",
                    },
                ],
            },
            SeedStandard {
                code: "5.3",
                name_en: "Administrative Efficiency",
                name_ar: "الكفاءة الإدارية",
                indicators: &[
                    SeedIndicator {
                        code: "5.3.1",
                        description_en: "Management of financial resources to serve the learning of all students",
                        description_ar: "إدارة الموارد المالية بما يخدم تعلم جميع الطلبة",
                    },
                    SeedIndicator {
                        code: "5.3.2",
                        description_en: "Optimal use of school facilities and educational resources",
                        description_ar: "الاستخدام الفاعل للمرافق المدرسية والوسائل التعليمية",
                    },
                    SeedIndicator {
                        code: "5.3.3",
                        description_en: "Organization of roles and responsibilities",
                        description_ar: "تنظيم الأدوار والمسؤوليات",
                    },
                    SeedIndicator {
                        code: "5.3.4",
                        description_en: "Management of human resources and raising their professional efficiency",
                        description_ar: "إدارة الموارد البشرية، ورفع كفاءتها المهنية",
                    },
                ],
            },
            SeedStandard {
                code: "5.4",
                name_en: "Partnership with Parents and the Community",
                name_ar: "الشراكة مع أولياء الأمور والمجتمع",
                indicators: &[
                    SeedIndicator {
                        code: "5.4.1",
                        description_en: "Involving parents in school life",
                        description_ar: "إشراك أولياء الأمور في الحياة المدرسية",
                    },
                    SeedIndicator {
                        code: "5.4.2",
                        description_en: "Enabling parents to support their children's learning",
                        description_ar: "تمكين أولياء الأمور من دعم تعلم أبنائهم",
                    },
                    SeedIndicator {
                        code: "5.4.3",
                        description_en: "Partnership with community institutions to contribute to the advancement of school life and support learning outcomes",
                        description_ar: "الشراكة مع مؤسسات المجتمع بما يسهم في الارتقاء بالحياة المدرسية ودعم نواتج التعلم",
                    },
                ],
            },
            SeedStandard {
                code: "5.5",
                name_en: "Governance",
                name_ar: "الحوكمة",
                indicators: &[
                    SeedIndicator {
                        code: "5.5.1",
                        description_en: "Accountability according to roles and responsibilities",
                        description_ar: "المساءلة وفق الأدوار والمسؤوليات",
                    },
                    SeedIndicator {
                        code: "5.5.2",
                        description_en: "Application of policies, systems, and organized regulations for work in the school",
                        description_ar: "تطبيق السياسات والأنظمة واللوائح المنظمة للعمل في المدرسة",
                    },
                    SeedIndicator {
                        code: "5.5.3",
                        description_en: "Transparency in providing data and ensuring participation",
                        description_ar: "الشفافية في توفير البيانات ومشاركتها",
                    },
                ],
            },
        ],
    },
];
