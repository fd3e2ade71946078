//! Instruction blocks appended to the generation prompt, one per archetype.

pub(super) const COMPREHENSIVE: &str = "\
Create a comprehensive README with ALL sections including:
1. Project title
2. Horizontal badge row (license, stars, forks, language, build status) - ALL ON ONE LINE
3. Detailed project overview with value proposition
4. Feature list with descriptions and checkboxes
5. Live demo links and screenshots section
6. Complete installation guide for multiple environments
7. Detailed usage examples with code snippets
8. API documentation if applicable
9. Configuration and environment variables
10. Testing instructions and coverage
11. Deployment guide for multiple platforms
12. Contributing guidelines with development setup
13. Roadmap and future plans
14. FAQ and troubleshooting
15. License and legal information
16. Acknowledgments and credits
17. Contact and support information

IMPORTANT: Ensure ALL badges are placed horizontally on a single line immediately after the title.";

pub(super) const STARTUP: &str = "\
Create a startup-focused README emphasizing:
1. Project title with horizontal badge row (license, stars, demo status) - ALL ON ONE LINE
2. Problem statement and solution
3. Key features and benefits for users
4. Live demo and screenshots
5. Quick start guide for immediate value
6. User testimonials or social proof section
7. Monetization model if applicable
8. Market validation and metrics
9. Team information and background
10. Investor information if open source
11. Community and social media links

IMPORTANT: Place ALL badges horizontally on one line after the title.";

pub(super) const LIBRARY: &str = "\
Create a library-focused README with:
1. Library title with horizontal badges (license, npm version, downloads, build) - ALL ON ONE LINE
2. Clear description of what the library does
3. Installation instructions for multiple package managers
4. Quick start examples with common use cases
5. Complete API documentation with parameters
6. Code examples for different scenarios
7. Browser and Node.js compatibility
8. TypeScript definitions if applicable
9. Performance benchmarks
10. Comparison with similar libraries
11. Contributing guidelines for library maintainers

IMPORTANT: Ensure badges are displayed horizontally in a single row.";

pub(super) const OPEN_SOURCE: &str = "\
Create an open-source focused README with:
1. Project title with horizontal badges (license, contributors, build status) - ALL ON ONE LINE
2. Project mission and vision
3. Community guidelines and code of conduct
4. Detailed contributing instructions
5. Issue templates and bug reporting
6. Development environment setup
7. Testing and quality assurance
8. Release process and versioning
9. Community recognition and contributors
10. Governance and decision-making process
11. Sponsorship and funding information

IMPORTANT: Display all badges horizontally on one line.";

pub(super) const PORTFOLIO: &str = "\
Create a portfolio-focused README showcasing:
1. Project title with horizontal badges (demo, license, tech stack) - ALL ON ONE LINE
2. Project overview and personal motivation
3. Technologies and skills demonstrated
4. Key features and innovative aspects
5. Live demo with multiple deployment links
6. Screenshots and visual demonstrations
7. Development process and challenges overcome
8. Lessons learned and skills gained
9. Future improvements and iterations
10. Related projects and portfolio links
11. Contact information and social profiles

IMPORTANT: Badges must be arranged horizontally on a single line.";

pub(super) const ACADEMIC: &str = "\
Create an academic-focused README with:
1. Research title with horizontal badges (license, DOI, publication status) - ALL ON ONE LINE
2. Research abstract and objectives
3. Methodology and experimental design
4. Dataset description and sources
5. Results and findings summary
6. Installation for research reproduction
7. Code structure and algorithm explanation
8. Citation information and BibTeX
9. Related publications and papers
10. Acknowledgments to advisors and institutions
11. Future research directions

IMPORTANT: Display badges horizontally in one row after the title.";

pub(super) const ENTERPRISE: &str = "\
Create an enterprise-focused README with:
1. Product title with horizontal badges (license, version, security status) - ALL ON ONE LINE
2. Business value proposition
3. Security and compliance information
4. Enterprise installation and deployment
5. Scalability and performance metrics
6. Integration with enterprise systems
7. Support and SLA information
8. Documentation and training resources
9. Change management and updates
10. Backup and disaster recovery
11. Vendor contact and procurement information

IMPORTANT: All badges should be on the same horizontal line.";

pub(super) const MINIMALIST: &str = "\
Create a clean, minimalist README with only essentials:
1. Project title with essential horizontal badges (license, stars) - ALL ON ONE LINE
2. Brief project description (2-3 sentences)
3. Quick installation (1-2 commands)
4. Basic usage example
5. Link to documentation if exists
6. License information
7. Contact or issues link

Keep it clean, scannable, and under 100 lines. IMPORTANT: Badges must be horizontal.";
