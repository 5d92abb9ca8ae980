//! JavaScript (plain Node.js) variant templates.
//!
//! Projects run straight from source: `server.js` at the project root
//! imports the Express app and starts listening; `nodemon` restarts it on
//! change.

use super::{ArtifactKind, FileTemplate};

pub(super) const FILES: &[FileTemplate] = &[
    FileTemplate {
        kind: ArtifactKind::AppModule,
        path: "src/app.js",
        content: APP,
    },
    FileTemplate {
        kind: ArtifactKind::ServerEntry,
        path: "server.js",
        content: SERVER,
    },
    FileTemplate {
        kind: ArtifactKind::EnvFile,
        path: ".env",
        content: ENV,
    },
    FileTemplate {
        kind: ArtifactKind::GitIgnore,
        path: ".gitignore",
        content: GITIGNORE,
    },
    FileTemplate {
        kind: ArtifactKind::PackageManifest,
        path: "package.json",
        content: PACKAGE_JSON,
    },
    FileTemplate {
        kind: ArtifactKind::Readme,
        path: "README.md",
        content: README,
    },
];

const APP: &str = r"import express from 'express';
import bodyParser from 'body-parser';
import cors from 'cors';
import dotenv from 'dotenv';

dotenv.config();

const app = express();

app.use(cors());
app.use(bodyParser.json());

app.get('/', (req, res) => {
  res.send('API is running...');
});

export default app;
";

const SERVER: &str = r"import app from './src/app.js';

const PORT = process.env.PORT || 5000;

app.listen(PORT, () => {
  console.log(`Server is running on port ${PORT}`);
});
";

const ENV: &str = "PORT=5000
DATABASE_URL=mongodb://localhost:27017/mydatabase
SECRET_KEY=mysecretkey
";

const GITIGNORE: &str = "node_modules
.env
.DS_Store
dist
";

const PACKAGE_JSON: &str = r#"{
  "name": "{{PROJECT_NAME}}",
  "version": "1.0.0",
  "description": "",
  "main": "server.js",
  "type": "module",
  "scripts": {
    "start": "node server.js",
    "dev": "nodemon server.js"
  },
  "keywords": [],
  "author": "",
  "license": "ISC",
  "dependencies": {
    "body-parser": "^1.19.0",
    "cors": "^2.8.5",
    "dotenv": "^10.0.0",
    "express": "^4.17.1"
  },
  "devDependencies": {
    "nodemon": "^2.0.7"
  }
}
"#;

const README: &str = r"# {{PROJECT_NAME}}

This is a Node.js backend project created with JavaScript.

## Installation

1. Navigate to the project directory:
   `cd {{PROJECT_NAME}}`

2. Install dependencies:
   `npm install`

## Running the Project

1. Start the development server:
   `npm run dev`
   This will start the server using nodemon, which will automatically restart the server whenever you make changes to the code.

2. Start the production server:
   `npm start`
   This will start the server in production mode.

## Project Structure

{{PROJECT_NAME}}/
├── src/
│   ├── controllers/
│   ├── middlewares/
│   ├── models/
│   ├── routes/
│   ├── services/
│   └── app.js
├── .env
├── .gitignore
├── package.json
├── server.js
└── README.md

## Environment Variables

- **PORT**: The port number on which the server will run.
- **DATABASE_URL**: The URL for the database connection.
- **SECRET_KEY**: A secret key for signing tokens or other secrets.

## Happy Coding! 🚀
";
