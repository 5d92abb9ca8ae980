//! TypeScript (typed) variant templates.
//!
//! Structurally identical to the `javascript` sibling module, but the entry
//! point moves under the source root (`src/server.ts`) and two build/watch
//! configuration files appear at the project root: `tsconfig.json` for the
//! compile step and `nodemon.json` to restart the compiled output.

use super::{ArtifactKind, FileTemplate};

pub(super) const FILES: &[FileTemplate] = &[
    FileTemplate {
        kind: ArtifactKind::AppModule,
        path: "src/app.ts",
        content: APP,
    },
    FileTemplate {
        kind: ArtifactKind::ServerEntry,
        path: "src/server.ts",
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
        kind: ArtifactKind::CompilerConfig,
        path: "tsconfig.json",
        content: TSCONFIG,
    },
    FileTemplate {
        kind: ArtifactKind::WatchConfig,
        path: "nodemon.json",
        content: NODEMON,
    },
    FileTemplate {
        kind: ArtifactKind::Readme,
        path: "README.md",
        content: README,
    },
];

const APP: &str = r"import express, { Request, Response } from 'express';
import bodyParser from 'body-parser';
import cors from 'cors';
import dotenv from 'dotenv';

dotenv.config();

const app = express();

app.use(cors());
app.use(bodyParser.json());

app.get('/', (req: Request, res: Response) => {
  res.send('API is running...');
});

export default app;
";

const SERVER: &str = r"import app from './app';

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
  "main": "dist/server.js",
  "scripts": {
    "start": "node dist/server.js",
    "dev": "concurrently \"tsc --watch\" \"nodemon\"",
    "build": "tsc"
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
    "@types/cors": "^2.8.12",
    "@types/express": "^4.17.13",
    "@types/node": "^16.11.7",
    "concurrently": "^6.4.0",
    "nodemon": "^2.0.7",
    "typescript": "^4.5.2"
  }
}
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "module": "commonjs",
    "rootDir": "./src",
    "outDir": "./dist",
    "esModuleInterop": true,
    "forceConsistentCasingInFileNames": true,
    "strict": true,
    "skipLibCheck": true
  },
  "include": ["src/**/*"]
}
"#;

const NODEMON: &str = r#"{
  "watch": ["dist"],
  "ext": "js",
  "exec": "node dist/server.js"
}
"#;

const README: &str = r"# {{PROJECT_NAME}}

This is a Node.js backend project created with TypeScript.

## Installation

1. Navigate to the project directory:
   `cd {{PROJECT_NAME}}`

2. Install dependencies:
   `npm install`

## Running the Project

1. Start the development server:
   `npm run dev`
   This will start the server using tsc --watch mode and concurrently, which will automatically restart the server whenever you make changes to the code.

2. Start the production server:
   `npm start`
   This will start the server in production mode.

3. Build the project:
   `npm run build`

## Project Structure

{{PROJECT_NAME}}/
├── src/
│   ├── controllers/
│   ├── middlewares/
│   ├── models/
│   ├── routes/
│   ├── services/
│   ├── app.ts
│   └── server.ts
├── .env
├── .gitignore
├── package.json
├── nodemon.json
├── tsconfig.json
└── README.md

## Environment Variables

- **PORT**: The port number on which the server will run.
- **DATABASE_URL**: The URL for the database connection.
- **SECRET_KEY**: A secret key for signing tokens or other secrets.

## Happy Coding! 🚀
";
